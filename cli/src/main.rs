//! ChainConst CLI — inspect the shared network and chain identifiers.
//!
//! # Commands
//! ```text
//! chainconst networks
//! chainconst network  <name|id>
//! chainconst chains   <network> [--json]
//! chainconst vms
//! chainconst migrate  <network> <chain> <new-id> [--json]
//! chainconst info
//! ```

use anyhow::{Context, Result};
use chainconst_observability::{init_tracing, LogConfig, RegistryMetrics};
use chainconst_registry::ChainRegistry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd_chains;
mod cmd_migrate;
mod cmd_network;

#[derive(Parser)]
#[command(
    name = "chainconst",
    about = "Network, chain, and VM identifiers — ChainConst CLI",
    long_about = "
ChainConst CLI: look up network IDs, bech32 prefixes, per-network chain IDs
and VM IDs. Chain IDs come from the built-in defaults for mainnet, testnet,
devnet and custom, optionally overridden by a registry file (--config).

NETWORKS may be given by name (mainnet, testnet, devnet, custom, testing),
as network-<id>, or as a bare numeric ID.
",
    version
)]
struct Cli {
    /// Global log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Registry override file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the well-known networks
    Networks,

    /// Resolve a network name or ID
    Network {
        /// Network name, network-<id>, or numeric ID
        network: String,
    },

    /// Show the chain IDs for a network
    Chains {
        /// Network name, network-<id>, or numeric ID
        network: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known virtual machines
    Vms,

    /// Migrate one chain ID on an in-memory copy of the registry and show the change
    Migrate {
        /// Network name, network-<id>, or numeric ID
        network: String,
        /// Chain alias, e.g. P, platform, Q, quantum
        chain: String,
        /// New chain ID (32-byte hex, 0x prefix optional)
        new_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ChainConst build info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        json: cli.json_logs,
        ..LogConfig::default()
    });

    let registry = build_registry(cli.config.as_deref())?;

    match cli.command {
        Commands::Networks => cmd_network::list(&registry),
        Commands::Network { network } => cmd_network::show(&network),
        Commands::Chains { network, json } => cmd_chains::run(&registry, &network, json),
        Commands::Vms => cmd_network::vms(),
        Commands::Migrate {
            network,
            chain,
            new_id,
            json,
        } => {
            let metrics = RegistryMetrics::global();
            metrics.observe(&registry);
            cmd_migrate::run(&registry, &metrics, &network, &chain, &new_id, json)
        }
        Commands::Info => cmd_info(&registry),
    }
}

/// The process-wide registry: built-in defaults plus any override file.
fn build_registry(config: Option<&std::path::Path>) -> Result<ChainRegistry> {
    let registry = ChainRegistry::with_defaults();
    if let Some(path) = config {
        let applied = registry
            .load_file(path)
            .with_context(|| format!("load registry file '{}'", path.display()))?;
        tracing::info!(path = %path.display(), networks = applied, "registry overrides loaded");
    }
    Ok(registry)
}

fn cmd_info(registry: &ChainRegistry) -> Result<()> {
    use chainconst_core::{network::network_name, Chain};

    println!("ChainConst v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Registered networks:");
    for network_id in registry.network_ids() {
        println!("  {:>6}  {}", network_id, network_name(network_id));
    }
    println!();
    println!("Chains:");
    for chain in Chain::ALL {
        println!("  {}  {}", chain.letter(), chain.name());
    }
    Ok(())
}
