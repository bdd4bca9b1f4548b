mod auth;
mod cli;
mod dashboard;
mod error;
mod filter;
mod models;
mod providers;
mod report;
mod scope;
mod trend;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting Sprintboard - Engineering Dashboard");
    cli.execute().await?;

    Ok(())
}
