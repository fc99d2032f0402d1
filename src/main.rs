use anyhow::{Context, Result};
use clap::Parser;
use comment_store::{AppConfig, cli::Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    let config = Cli::parse().apply(config)?;

    run(config).await
}
