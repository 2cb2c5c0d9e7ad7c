//! In-memory chain registry.
//!
//! Thread-safe via `Arc<RwLock<Inner>>`: one lock guards both the config
//! map and the observer list, so a registration can never interleave with
//! a migration. Clones share the same state.

use chainconst_core::{
    network::WELL_KNOWN_NETWORK_IDS, Chain, ChainConfig, ChainId, ChainLookup, NetworkId,
    RegistryError,
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::{debug, info, warn};

use crate::callback::MigrationCallback;

#[derive(Default)]
struct Inner {
    configs: HashMap<NetworkId, ChainConfig>,
    /// Append-only; invoked in registration order.
    callbacks: Vec<Arc<dyn MigrationCallback>>,
}

/// Thread-safe directory of per-network chain IDs.
#[derive(Clone, Default)]
pub struct ChainRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl ChainRegistry {
    /// An empty registry with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with mainnet, testnet, devnet and custom
    /// configs using the native chain IDs.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for &network_id in WELL_KNOWN_NETWORK_IDS {
            registry.register_config(ChainConfig::with_defaults(network_id));
        }
        registry
    }

    // Poisoning only means another thread panicked mid-call; every write
    // here leaves the map consistent, so the data is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or wholesale-replace the config for `config.network_id`.
    ///
    /// Replacement is not a migration: no callbacks fire.
    pub fn register_config(&self, config: ChainConfig) {
        let replaced = self
            .write()
            .configs
            .insert(config.network_id, config)
            .is_some();
        debug!(network_id = config.network_id, replaced, "registered chain config");
    }

    /// Snapshot of the config registered for `network_id`.
    pub fn get_config(&self, network_id: NetworkId) -> Option<ChainConfig> {
        self.read().configs.get(&network_id).copied()
    }

    /// Replace one chain's ID on a registered network, addressed by alias
    /// (`"P"`/`"platform"`, `"Q"`/`"quantum"`, ...).
    ///
    /// Fails with [`RegistryError::NetworkNotFound`] before looking at the
    /// alias, so an unknown network is reported even with a bad alias.
    pub fn migrate_chain(
        &self,
        network_id: NetworkId,
        chain_name: &str,
        new_chain_id: ChainId,
    ) -> Result<(), RegistryError> {
        let outcome = self.commit(network_id, new_chain_id, || {
            Chain::from_alias(chain_name).ok_or_else(|| RegistryError::UnknownChain {
                name: chain_name.to_string(),
            })
        });
        if let Err(e) = &outcome {
            warn!(network_id, chain = chain_name, error = %e, "chain migration rejected");
        }
        outcome
    }

    /// Typed form of [`migrate_chain`](Self::migrate_chain).
    pub fn migrate(
        &self,
        network_id: NetworkId,
        chain: Chain,
        new_chain_id: ChainId,
    ) -> Result<(), RegistryError> {
        let outcome = self.commit(network_id, new_chain_id, || Ok(chain));
        if let Err(e) = &outcome {
            warn!(network_id, %chain, error = %e, "chain migration rejected");
        }
        outcome
    }

    /// Mutate under the write lock, then notify observers with the lock
    /// released.
    fn commit(
        &self,
        network_id: NetworkId,
        new_chain_id: ChainId,
        resolve: impl FnOnce() -> Result<Chain, RegistryError>,
    ) -> Result<(), RegistryError> {
        let (chain, before, after, callbacks) = {
            let mut inner = self.write();
            let config = inner
                .configs
                .get_mut(&network_id)
                .ok_or(RegistryError::NetworkNotFound { network_id })?;
            let chain = resolve()?;
            let before = *config;
            config.set(chain, new_chain_id);
            let after = *config;
            (chain, before, after, inner.callbacks.clone())
        };

        info!(
            network_id,
            %chain,
            old = %before.get(chain),
            new = %new_chain_id,
            observers = callbacks.len(),
            "chain migrated"
        );

        for callback in &callbacks {
            callback.on_migrate(network_id, &before, &after);
        }
        Ok(())
    }

    /// Register a closure to run after every committed migration.
    /// There is no way to unregister.
    pub fn on_migrate<F>(&self, callback: F)
    where
        F: Fn(NetworkId, &ChainConfig, &ChainConfig) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(callback));
    }

    /// Register a shared observer. See [`on_migrate`](Self::on_migrate).
    pub fn subscribe(&self, callback: Arc<dyn MigrationCallback>) {
        self.write().callbacks.push(callback);
    }

    /// Registered network IDs, ascending.
    pub fn network_ids(&self) -> Vec<NetworkId> {
        let mut ids: Vec<_> = self.read().configs.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.read().configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().configs.is_empty()
    }

    // Per-chain accessors. Unregistered networks read the mainnet IDs via
    // `ChainLookup::get_or_default`.

    pub fn p_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::P)
    }

    pub fn x_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::X)
    }

    pub fn c_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::C)
    }

    pub fn q_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::Q)
    }

    pub fn a_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::A)
    }

    pub fn b_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::B)
    }

    pub fn t_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::T)
    }

    pub fn z_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::Z)
    }

    pub fn g_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::G)
    }

    pub fn k_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::K)
    }

    pub fn d_chain_id(&self, network_id: NetworkId) -> ChainId {
        self.chain_id(network_id, Chain::D)
    }
}

/// `get_or_default` and `chain_id` come from the trait defaults.
impl ChainLookup for ChainRegistry {
    fn get_config(&self, network_id: NetworkId) -> Option<ChainConfig> {
        ChainRegistry::get_config(self, network_id)
    }
}

impl std::fmt::Debug for ChainRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("ChainRegistry")
            .field("networks", &inner.configs.len())
            .field("callbacks", &inner.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainconst_core::{
        network::{CUSTOM_ID, DEVNET_ID, MAINNET_ID, TESTNET_ID},
        Id,
    };
    use std::sync::Mutex;

    fn id(tag: &str) -> ChainId {
        Id::from_tag(tag.as_bytes())
    }

    fn config_42() -> ChainConfig {
        let mut config = ChainConfig::with_defaults(42);
        config.p_chain_id = id("p1");
        config.x_chain_id = id("x1");
        config
    }

    #[test]
    fn new_is_empty() {
        let reg = ChainRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.get_config(MAINNET_ID), None);
    }

    #[test]
    fn with_defaults_has_four_networks() {
        let reg = ChainRegistry::with_defaults();
        assert_eq!(
            reg.network_ids(),
            vec![MAINNET_ID, TESTNET_ID, DEVNET_ID, CUSTOM_ID]
        );
        assert_eq!(reg.get_config(DEVNET_ID), Some(ChainConfig::devnet()));
    }

    #[test]
    fn register_replaces_wholesale() {
        let reg = ChainRegistry::new();
        reg.register_config(config_42());
        let mut replacement = ChainConfig::with_defaults(42);
        replacement.c_chain_id = id("c9");
        reg.register_config(replacement);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get_config(42), Some(replacement));
    }

    #[test]
    fn register_does_not_notify() {
        let reg = ChainRegistry::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        reg.on_migrate(move |_, _, _| *counter.lock().unwrap() += 1);
        reg.register_config(config_42());
        reg.register_config(config_42());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn get_or_default_does_not_insert() {
        let reg = ChainRegistry::with_defaults();
        let a = reg.get_or_default(777);
        let b = reg.get_or_default(777);
        assert_eq!(a, ChainConfig::fallback(777));
        assert_eq!(a, b);
        assert!(a.diff(&ChainConfig::mainnet()).is_empty());
        assert_eq!(reg.get_config(777), None);
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn migrate_scenario_42() {
        let reg = ChainRegistry::new();
        reg.register_config(config_42());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        reg.on_migrate(move |network_id, before: &ChainConfig, after: &ChainConfig| {
            sink.lock()
                .unwrap()
                .push((network_id, before.x_chain_id, after.x_chain_id));
        });

        reg.migrate_chain(42, "X", id("x2")).unwrap();

        let config = reg.get_config(42).unwrap();
        assert_eq!(config.x_chain_id, id("x2"));
        assert_eq!(config.p_chain_id, id("p1"));
        assert_eq!(*seen.lock().unwrap(), vec![(42, id("x1"), id("x2"))]);
    }

    #[test]
    fn migrate_unknown_network() {
        let reg = ChainRegistry::new();
        let err = reg.migrate_chain(999, "P", id("p9")).unwrap_err();
        assert_eq!(err, RegistryError::NetworkNotFound { network_id: 999 });
        assert!(reg.is_empty());
    }

    #[test]
    fn migrate_unknown_network_wins_over_bad_alias() {
        let reg = ChainRegistry::new();
        let err = reg.migrate_chain(999, "nonsense", id("z")).unwrap_err();
        assert_eq!(err, RegistryError::NetworkNotFound { network_id: 999 });
    }

    #[test]
    fn migrate_unknown_alias_leaves_config() {
        let reg = ChainRegistry::new();
        reg.register_config(ChainConfig::with_defaults(7));
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        reg.on_migrate(move |_, _, _| *counter.lock().unwrap() += 1);

        let err = reg.migrate_chain(7, "nonsense", id("z")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownChain {
                name: "nonsense".into()
            }
        );
        assert_eq!(reg.get_config(7), Some(ChainConfig::with_defaults(7)));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn full_word_alias_changes_only_that_field() {
        let reg = ChainRegistry::with_defaults();
        let before = reg.get_config(TESTNET_ID).unwrap();
        reg.migrate_chain(TESTNET_ID, "quantum", id("q-next")).unwrap();
        let after = reg.get_config(TESTNET_ID).unwrap();
        assert_eq!(after.q_chain_id, id("q-next"));
        assert_eq!(after.diff(&before), vec![Chain::Q]);
    }

    #[test]
    fn typed_migrate() {
        let reg = ChainRegistry::with_defaults();
        reg.migrate(MAINNET_ID, Chain::K, id("kms2")).unwrap();
        assert_eq!(reg.k_chain_id(MAINNET_ID), id("kms2"));
        assert_eq!(
            reg.migrate(5, Chain::K, id("kms2")),
            Err(RegistryError::NetworkNotFound { network_id: 5 })
        );
    }

    #[test]
    fn accessors_fall_back_to_mainnet() {
        let reg = ChainRegistry::new();
        assert_eq!(reg.p_chain_id(31337), Chain::P.native_id());
        assert_eq!(reg.d_chain_id(31337), Chain::D.native_id());
        assert!(reg.is_empty());
    }

    #[test]
    fn clones_share_state() {
        let reg = ChainRegistry::new();
        let other = reg.clone();
        other.register_config(config_42());
        assert_eq!(reg.get_config(42), Some(config_42()));
    }

    #[test]
    fn callback_may_reenter_registry() {
        let reg = ChainRegistry::with_defaults();
        let handle = reg.clone();
        let observed = Arc::new(Mutex::new(None));
        let sink = observed.clone();
        reg.on_migrate(move |network_id, _, _| {
            *sink.lock().unwrap() = handle.get_config(network_id);
        });
        reg.migrate_chain(DEVNET_ID, "C", id("c2")).unwrap();
        let seen = (*observed.lock().unwrap()).expect("callback ran");
        assert_eq!(seen.c_chain_id, id("c2"));
    }
}
