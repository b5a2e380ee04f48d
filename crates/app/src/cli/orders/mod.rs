use clap::{Args, Subcommand};

mod delete;
mod list;
mod mark_paid;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List orders, newest first
    List(list::ListOrdersArgs),

    /// Show one order with its items
    Show(show::ShowOrderArgs),

    /// Mark orders as paid
    MarkPaid(mark_paid::MarkPaidArgs),

    /// Delete an order
    Delete(delete::DeleteOrderArgs),
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List(args) => list::run(args).await,
        OrdersSubcommand::Show(args) => show::run(args).await,
        OrdersSubcommand::MarkPaid(args) => mark_paid::run(args).await,
        OrdersSubcommand::Delete(args) => delete::run(args).await,
    }
}
