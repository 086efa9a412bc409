//! Command-line arguments.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;
use substat_types::Network;
use substat_utils::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "substat", version, about = "Validator statistics for subnets")]
pub struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "SUBSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "SUBSTAT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "SUBSTAT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show validator statistics for the given subnet.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Name of a subnet created with the tooling.
    pub subnet_name: String,

    /// Print stats on Fuji (alias: --testnet).
    #[arg(long, visible_alias = "testnet", conflicts_with = "mainnet")]
    pub fuji: bool,

    /// Print stats on Mainnet.
    #[arg(long)]
    pub mainnet: bool,

    /// Base URL of the local node, tried before the public endpoint.
    #[arg(long, env = "SUBSTAT_LOCAL_ENDPOINT")]
    pub local_endpoint: Option<String>,

    /// Print pending start and end times in UTC instead of local time.
    #[arg(long, env = "SUBSTAT_UTC")]
    pub utc: bool,

    /// Directory holding the subnet sidecars.
    #[arg(long, env = "SUBSTAT_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            ..Overrides::default()
        };
        match &self.command {
            Command::Stats(args) => {
                overrides.base_dir = args.base_dir.clone();
                overrides.local_endpoint = args.local_endpoint.clone();
                overrides.utc = args.utc;
            }
        }
        overrides
    }
}

impl StatsArgs {
    /// Network picked by flag, if any.
    pub fn network_flag(&self) -> Option<Network> {
        select_network(self.fuji, self.mainnet)
    }
}

pub fn select_network(fuji: bool, mainnet: bool) -> Option<Network> {
    match (fuji, mainnet) {
        (true, _) => Some(Network::Fuji),
        (false, true) => Some(Network::Mainnet),
        (false, false) => None,
    }
}

/// Ask which public network to query.
pub fn prompt_network() -> dialoguer::Result<Network> {
    let items: Vec<&str> = Network::PUBLIC.iter().map(|n| n.name()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(
            "Choose a network from which you want to get the statistics \
             (this command only supports public networks)",
        )
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Network::PUBLIC[selection])
}
