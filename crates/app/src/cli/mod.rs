use cafe_app::{
    database::{self, Db},
    domain::orders::PgOrdersService,
};
use clap::{Parser, Subcommand};

mod db;
mod orders;
mod revenue;

/// One connection is enough for a single console command.
const CLI_MAX_CONNECTIONS: u32 = 1;

#[derive(Debug, Parser)]
#[command(name = "cafe-app", about = "Cafe orders administration", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Orders(orders::OrdersCommand),
    Revenue(revenue::RevenueArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
            Commands::Revenue(args) => revenue::run(args).await,
        }
    }
}

pub(crate) async fn orders_service(database_url: &str) -> Result<PgOrdersService, String> {
    let pool = database::connect(database_url, CLI_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgOrdersService::new(Db::new(pool)))
}
