//! Read-only view of a chain directory.

use crate::chain::Chain;
use crate::config::ChainConfig;
use crate::id::ChainId;
use crate::network::NetworkId;

/// A thread-safe, read-only view of a chain registry.
/// The concrete implementation lives in `chainconst-registry`.
pub trait ChainLookup: Send + Sync {
    /// The config registered for `network_id`, if any.
    fn get_config(&self, network_id: NetworkId) -> Option<ChainConfig>;

    /// The registered config, or mainnet identifiers re-keyed to
    /// `network_id`. The fallback is never stored.
    fn get_or_default(&self, network_id: NetworkId) -> ChainConfig {
        self.get_config(network_id)
            .unwrap_or_else(|| ChainConfig::fallback(network_id))
    }

    fn chain_id(&self, network_id: NetworkId, chain: Chain) -> ChainId {
        self.get_or_default(network_id).get(chain)
    }
}
