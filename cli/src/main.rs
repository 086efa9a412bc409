//! substat: validator statistics for subnets.

mod args;
mod commands;
mod config;
mod render;

use anyhow::Context;
use args::{Cli, Command};
use clap::Parser;
use config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (file_config, config_error) = match cli.config.as_deref() {
        Some(path) => match CliConfig::from_toml_file(path) {
            Ok(config) => (config, None),
            Err(e) => (CliConfig::default(), Some(e)),
        },
        None => (CliConfig::default(), None),
    };
    let config = file_config.with_overrides(cli.overrides());

    substat_utils::init_logging(config.log_format, &config.log_level)
        .context("failed to initialise logging")?;
    match (&cli.config, config_error) {
        (Some(path), None) => tracing::info!("Loaded config from {}", path.display()),
        (_, Some(e)) => tracing::warn!("{e}, using defaults"),
        (None, None) => {}
    }

    match cli.command {
        Command::Stats(args) => commands::stats::run(args, &config).await,
    }
}
