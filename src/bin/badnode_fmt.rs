//! BadNode display helpers on the command line
//!
//! Prints the same labels, colors and network metadata the dashboard renders.

use std::path::PathBuf;

use anyhow::Context;
use badnode_display::{
    derive_status_label, format_bytes, format_thousands, init_logging, parse_client_version,
    DisplayConfig, LogLevel, NetworkDescriptor,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "badnode-fmt")]
#[command(about = "BadNode display formatting helpers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to display config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Format a client version string, e.g. "Geth/v1.10.2/linux-amd64/go1.16"
    Version { raw: String },

    /// Show the network registered for a chain ID
    Network {
        chain_id: String,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all known networks
    Networks {
        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Insert thousands separators
    Thousands {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Format a byte count in GB
    Bytes { bytes: Option<u64> },

    /// Status label and color for a node's flags
    Status {
        #[arg(long)]
        listening: bool,

        #[arg(long)]
        syncing: bool,
    },
}

/// One network as a table row or JSON; a miss renders as `null` in JSON mode
fn render_network(network: Option<&NetworkDescriptor>, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&network)?);
    }
    Ok(match network {
        Some(network) => format!(
            "{:>6}  {:<30} {:<5} {}",
            network.id, network.label, network.currency_symbol, network.icon
        ),
        None => "Unknown network".to_string(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DisplayConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DisplayConfig::load_or_default().context("Failed to load default config")?,
    };

    let mut logging = config.logging.clone();
    if cli.debug {
        logging.level = LogLevel::Debug;
    }
    init_logging(&logging)?;

    let registry = config.registry()?;
    tracing::debug!(networks = registry.len(), "configuration loaded");

    match cli.command {
        Commands::Version { raw } => println!("{}", parse_client_version(&raw)),
        Commands::Network { chain_id, json } => {
            println!("{}", render_network(registry.lookup(chain_id.as_str()), json)?)
        }
        Commands::Networks { json } => {
            if json {
                let networks: Vec<&NetworkDescriptor> = registry.iter().collect();
                println!("{}", serde_json::to_string_pretty(&networks)?);
            } else {
                for network in registry.iter() {
                    println!("{}", render_network(Some(network), false)?);
                }
            }
        }
        Commands::Thousands { value } => println!("{}", format_thousands(value)),
        Commands::Bytes { bytes } => println!("{}", format_bytes(bytes)),
        Commands::Status { listening, syncing } => {
            let status = derive_status_label(listening, syncing);
            println!("{} {}", status, config.palette.color(status));
        }
    }

    Ok(())
}
