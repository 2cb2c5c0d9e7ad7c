//! # chainconst-core
//!
//! Shared identifiers and lookup tables for a multi-chain platform.
//! The node, the CLI, the local network runner and the EVM execution layer
//! all agree on network IDs, chain IDs and VM IDs through this crate.
//!
//! The mutable per-network directory lives in `chainconst-registry`; this
//! crate only defines the value types it stores and the read-only
//! [`ChainLookup`] interface callers program against.

pub mod chain;
pub mod config;
pub mod error;
pub mod id;
pub mod lookup;
pub mod network;
pub mod vm;

pub use chain::Chain;
pub use config::ChainConfig;
pub use error::{ConfigError, ParseIdError, ParseNetworkError, RegistryError};
pub use id::{ChainId, Id, VmId};
pub use lookup::ChainLookup;
pub use network::NetworkId;
