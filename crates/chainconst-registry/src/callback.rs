//! Observer seam for chain migrations.

use chainconst_core::{ChainConfig, NetworkId};

/// Invoked once per committed migration with the config as it was before
/// the change and as it is after.
///
/// Callbacks run synchronously on the migrating thread, after the registry
/// lock has been released, so they may read from or write to the registry.
pub trait MigrationCallback: Send + Sync {
    fn on_migrate(&self, network_id: NetworkId, before: &ChainConfig, after: &ChainConfig);
}

/// Blanket impl so closures can be used as migration callbacks.
impl<F: Fn(NetworkId, &ChainConfig, &ChainConfig) + Send + Sync> MigrationCallback for F {
    fn on_migrate(&self, network_id: NetworkId, before: &ChainConfig, after: &ChainConfig) {
        self(network_id, before, after)
    }
}
