mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use pawcare_core::config::{load_dotenv, Config};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    let config = Config::from_env();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    config.log_summary();

    let catalog_dir = args.catalog_dir.clone().or_else(|| config.catalog.dir.clone());
    let loaded = catalog_dir
        .as_deref()
        .map(commands::load_catalog)
        .transpose()
        .context("failed to load care schedule catalog")?;
    let catalog = commands::active_catalog(loaded.as_ref());
    debug!(version = %catalog.version(), "catalog ready");

    let output = commands::run(args.command, catalog, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
