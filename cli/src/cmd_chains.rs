//! `chainconst chains` — print the chain IDs active on a network.

use anyhow::Result;
use chainconst_core::network::network_name;
use chainconst_registry::{ChainLookup, ChainRegistry};

use crate::cmd_network::resolve;

pub fn run(registry: &ChainRegistry, network: &str, as_json: bool) -> Result<()> {
    let network_id = resolve(network)?;
    let registered = registry.get_config(network_id).is_some();
    let config = registry.get_or_default(network_id);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Network: {} ({})", network_name(network_id), network_id);
    if !registered {
        println!("  (not registered; showing mainnet defaults)");
    }
    for (chain, id) in config.entries() {
        println!("  {}  {:12} {}", chain.letter(), chain.name(), id);
    }
    Ok(())
}
