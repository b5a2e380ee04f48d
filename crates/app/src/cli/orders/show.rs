use cafe::receipt::ItemsTable;
use cafe_app::domain::orders::{OrdersService, records::OrderId};
use clap::Args;

use crate::cli::orders_service;

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order id
    id: i64,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let service = orders_service(&args.database_url).await?;

    let record = service
        .get_order(OrderId::from_id(args.id))
        .await
        .map_err(|error| format!("failed to load order {}: {error}", args.id))?;

    println!("id: {}", record.id);
    println!("table_number: {}", record.order.table_number());
    println!("status: {}", record.order.status().label());
    println!("total_price: {:.2}", record.order.total_price());
    println!("created_at: {}", record.created_at);
    println!("updated_at: {}", record.updated_at);
    println!();
    println!("{}", ItemsTable::new(&record.order));

    Ok(())
}
