use cafe_app::domain::orders::OrdersService;
use clap::Args;

use super::orders_service;

#[derive(Debug, Args)]
pub(crate) struct RevenueArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: RevenueArgs) -> Result<(), String> {
    let service = orders_service(&args.database_url).await?;

    let revenue = service
        .total_revenue()
        .await
        .map_err(|error| format!("failed to compute revenue: {error}"))?;

    println!("total_revenue: {revenue:.2}");

    Ok(())
}
