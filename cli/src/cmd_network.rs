//! `chainconst networks`, `chainconst network`, `chainconst vms`.

use anyhow::Result;
use chainconst_core::{
    network::{self, NetworkId},
    vm::KNOWN_VMS,
};
use chainconst_registry::ChainRegistry;

/// Parse a network argument into its ID.
pub fn resolve(name: &str) -> Result<NetworkId> {
    Ok(network::network_id(name)?)
}

pub fn list(registry: &ChainRegistry) -> Result<()> {
    println!("{:>6}  {:10} {:8} {:>10}  {}", "ID", "NAME", "HRP", "EVM ID", "PRODUCTION");
    for network_id in registry.network_ids() {
        println!(
            "{:>6}  {:10} {:8} {:>10}  {}",
            network_id,
            network::network_name(network_id),
            network::hrp(network_id),
            evm_chain_id(network_id).map(|id| id.to_string()).unwrap_or_default(),
            if network::is_production(network_id) { "yes" } else { "no" },
        );
    }
    Ok(())
}

pub fn show(name: &str) -> Result<()> {
    let network_id = resolve(name)?;
    println!("Network:    {}", network::network_name(network_id));
    println!("ID:         {}", network_id);
    println!("HRP:        {}", network::hrp(network_id));
    if let Some(evm) = evm_chain_id(network_id) {
        println!("EVM ID:     {}", evm);
    }
    println!("Production: {}", network::is_production(network_id));
    Ok(())
}

pub fn vms() -> Result<()> {
    for (id, name) in KNOWN_VMS {
        println!("  {:12} {}", name, id);
    }
    Ok(())
}

/// EVM chain ID wallets use for the contract chain of a network.
fn evm_chain_id(network_id: NetworkId) -> Option<NetworkId> {
    match network_id {
        network::MAINNET_ID => Some(network::MAINNET_CHAIN_ID),
        network::TESTNET_ID => Some(network::TESTNET_CHAIN_ID),
        network::DEVNET_ID => Some(network::DEVNET_CHAIN_ID),
        network::CUSTOM_ID => Some(network::CUSTOM_CHAIN_ID),
        _ => None,
    }
}
