//! Error types shared across ChainConst crates.

use crate::network::NetworkId;
use thiserror::Error;

/// Errors returned by registry mutations.
///
/// Read paths never fail: absence is reported as `None` or answered with
/// the mainnet fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("network {network_id} not found in registry")]
    NetworkNotFound { network_id: NetworkId },

    #[error("unknown chain name '{name}'")]
    UnknownChain { name: String },
}

/// Failure to parse an [`Id`](crate::id::Id) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("invalid hex in identifier '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("identifier must be {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// Failure to resolve a network name or numeric ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse network name: {input:?}")]
pub struct ParseNetworkError {
    pub input: String,
}

/// Errors from loading a registry override file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in registry file: {0}")]
    Parse(String),

    #[error("network {network_id}: unknown chain name '{name}'")]
    UnknownChain { network_id: NetworkId, name: String },

    #[error("network {network_id}, chain {chain}: {source}")]
    InvalidChainId {
        network_id: NetworkId,
        chain: String,
        #[source]
        source: ParseIdError,
    },
}
