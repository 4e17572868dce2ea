//! Écritoire CLI

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ecritoire::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging);
    config.validate().context("Invalid configuration")?;

    cli::run(cli, &config).await
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if logging.json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}
