//! `chainconst migrate` — rehearse a chain ID migration.
//!
//! The registry lives only for this process, so nothing is persisted; the
//! command shows what observers would receive.

use anyhow::{Context, Result};
use chainconst_core::{ChainConfig, ChainId, NetworkId};
use chainconst_observability::RegistryMetrics;
use chainconst_registry::ChainRegistry;
use std::sync::{Arc, Mutex};

use crate::cmd_network::resolve;

pub fn run(
    registry: &ChainRegistry,
    metrics: &RegistryMetrics,
    network: &str,
    chain: &str,
    new_id: &str,
    as_json: bool,
) -> Result<()> {
    let network_id = resolve(network)?;
    let new_id: ChainId = new_id
        .parse()
        .with_context(|| format!("invalid chain ID '{}'", new_id))?;

    let captured: Arc<Mutex<Option<(NetworkId, ChainConfig, ChainConfig)>>> =
        Arc::new(Mutex::new(None));
    let sink = captured.clone();
    registry.on_migrate(move |network_id, before: &ChainConfig, after: &ChainConfig| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some((network_id, *before, *after));
        }
    });

    if let Err(e) = registry.migrate_chain(network_id, chain, new_id) {
        metrics.record_error(&e);
        return Err(e).with_context(|| format!("migrate {} on network {}", chain, network));
    }

    let notified = captured
        .lock()
        .ok()
        .and_then(|slot| *slot)
        .context("migration committed but no notification was delivered")?;
    let (network_id, before, after) = notified;

    if as_json {
        let report = serde_json::json!({
            "network_id": network_id,
            "changed": after.diff(&before).iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "before": before,
            "after": after,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Migrated network {}:", network_id);
        for chain in after.diff(&before) {
            println!("  {} {}", chain.letter(), chain.name());
            println!("    old: {}", before.get(chain));
            println!("    new: {}", after.get(chain));
        }
        if after == before {
            println!("  (new ID equals the current ID; nothing changed)");
        }
    }
    Ok(())
}
