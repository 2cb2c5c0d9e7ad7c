//! ChainConst metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and are exported by whatever
//! meter provider the host process installs.

use chainconst_core::{ChainConfig, NetworkId, RegistryError};
use chainconst_registry::{ChainRegistry, MigrationCallback};
use opentelemetry::{
    metrics::{Counter, Meter},
    KeyValue,
};
use std::sync::Arc;

/// Central metrics handle for the chain registry.
#[derive(Clone)]
pub struct RegistryMetrics {
    pub migrations: Counter<u64>,
    pub migration_errors: Counter<u64>,
}

impl RegistryMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            migrations: meter
                .u64_counter("chainconst.migrations")
                .with_description("Chain IDs changed by committed migrations")
                .build(),
            migration_errors: meter
                .u64_counter("chainconst.migration_errors")
                .with_description("Migrations rejected by the registry")
                .build(),
        }
    }

    /// Metrics bound to the globally installed meter provider.
    pub fn global() -> Self {
        Self::new(&opentelemetry::global::meter("chainconst"))
    }

    /// Count every future migration committed on `registry`.
    pub fn observe(&self, registry: &ChainRegistry) {
        registry.subscribe(Arc::new(self.clone()));
    }

    pub fn record_migration(&self, network_id: NetworkId, chain: &str) {
        self.migrations.add(
            1,
            &[
                KeyValue::new("network", i64::from(network_id)),
                KeyValue::new("chain", chain.to_string()),
            ],
        );
    }

    pub fn record_error(&self, error: &RegistryError) {
        let error_type = match error {
            RegistryError::NetworkNotFound { .. } => "network_not_found",
            RegistryError::UnknownChain { .. } => "unknown_chain",
        };
        self.migration_errors
            .add(1, &[KeyValue::new("error_type", error_type)]);
    }
}

impl MigrationCallback for RegistryMetrics {
    fn on_migrate(&self, network_id: NetworkId, before: &ChainConfig, after: &ChainConfig) {
        for chain in after.diff(before) {
            self.record_migration(network_id, chain.name());
        }
    }
}
