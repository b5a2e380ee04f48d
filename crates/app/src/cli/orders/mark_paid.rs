use cafe_app::domain::orders::{OrdersService, records::OrderId};
use clap::Args;

use crate::cli::orders_service;

#[derive(Debug, Args)]
pub(crate) struct MarkPaidArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order ids to mark as paid
    #[arg(required = true, num_args = 1..)]
    ids: Vec<i64>,
}

pub(crate) async fn run(args: MarkPaidArgs) -> Result<(), String> {
    let service = orders_service(&args.database_url).await?;

    let ids = args.ids.into_iter().map(OrderId::from_id).collect();

    let updated = service
        .mark_paid(ids)
        .await
        .map_err(|error| format!("failed to mark orders as paid: {error}"))?;

    println!("{updated} order(s) marked as paid.");

    Ok(())
}
