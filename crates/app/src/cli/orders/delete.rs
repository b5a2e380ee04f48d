use cafe_app::domain::orders::{OrdersService, records::OrderId};
use clap::Args;

use crate::cli::orders_service;

#[derive(Debug, Args)]
pub(crate) struct DeleteOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order id
    id: i64,
}

pub(crate) async fn run(args: DeleteOrderArgs) -> Result<(), String> {
    let service = orders_service(&args.database_url).await?;

    service
        .delete_order(OrderId::from_id(args.id))
        .await
        .map_err(|error| format!("failed to delete order {}: {error}", args.id))?;

    println!("order {} deleted", args.id);

    Ok(())
}
