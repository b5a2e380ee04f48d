use cafe::{items::OrderItem, status::OrderStatus};
use cafe_app::domain::orders::{
    OrdersService,
    data::{OrdersFilter, PageRequest},
};
use clap::Args;
use jiff::Timestamp;
use tabled::{builder::Builder, settings::Style};

use crate::cli::orders_service;

const PAGE_SIZE: u64 = 20;

#[derive(Debug, Args)]
pub(crate) struct ListOrdersArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only orders in this status (pending, ready, paid)
    #[arg(long)]
    status: Option<OrderStatus>,

    /// Only orders for this table
    #[arg(long)]
    table: Option<i32>,

    /// Match an order id or table number
    #[arg(long)]
    search: Option<i64>,

    /// Only orders created at or after this instant (RFC 3339)
    #[arg(long)]
    created_after: Option<Timestamp>,

    /// Only orders created before this instant (RFC 3339)
    #[arg(long)]
    created_before: Option<Timestamp>,

    /// Only orders updated at or after this instant (RFC 3339)
    #[arg(long)]
    updated_after: Option<Timestamp>,

    /// Only orders updated before this instant (RFC 3339)
    #[arg(long)]
    updated_before: Option<Timestamp>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u64,
}

pub(crate) async fn run(args: ListOrdersArgs) -> Result<(), String> {
    let service = orders_service(&args.database_url).await?;

    let page = service
        .list_orders(filter(&args), PageRequest::page(args.page, PAGE_SIZE))
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if page.orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["id", "table_number", "status", "total_price", "created_at", "items"]);

    for record in &page.orders {
        builder.push_record([
            record.id.to_string(),
            record.order.table_number().to_string(),
            record.order.status().label().to_string(),
            format!("{:.2}", record.order.total_price()),
            record.created_at.strftime("%Y-%m-%d %H:%M:%S").to_string(),
            summarize(record.order.items()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    println!("{table}");
    println!(
        "page {} of {} ({} orders)",
        args.page.max(1),
        page.total.div_ceil(PAGE_SIZE).max(1),
        page.total
    );

    Ok(())
}

fn filter(args: &ListOrdersArgs) -> OrdersFilter {
    OrdersFilter {
        table_number: args.table,
        status: args.status,
        search: args.search,
        created_after: args.created_after,
        created_before: args.created_before,
        updated_after: args.updated_after,
        updated_before: args.updated_before,
    }
}

fn summarize(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} x{}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}
