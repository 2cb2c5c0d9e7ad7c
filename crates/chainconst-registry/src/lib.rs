//! # chainconst-registry
//!
//! Chain Registry for ChainConst.
//!
//! Maps a network ID to the [`ChainConfig`] bundle of chain IDs active on
//! that network, with:
//! 1. **Fallback lookups** — unknown networks answer with mainnet IDs
//! 2. **Migration** — swap one chain's ID and notify observers with the
//!    before/after configs
//! 3. **Override files** — YAML/JSON documents applied at startup
//!
//! The read-only interface is the `ChainLookup` trait from `chainconst-core`.

pub mod callback;
pub mod file;
pub mod memory;

pub use callback::MigrationCallback;
pub use file::{NetworkOverride, RegistryFile};
pub use memory::ChainRegistry;

pub use chainconst_core::{Chain, ChainConfig, ChainId, ChainLookup, NetworkId, RegistryError};
