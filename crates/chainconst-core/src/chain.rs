//! The closed set of special-purpose chains every network runs.

use crate::error::RegistryError;
use crate::id::ChainId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the parallel chains inside a network.
///
/// Serialised by its single-letter form (`"P"`, `"X"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chain {
    /// Platform chain: staking and validation.
    P,
    /// Exchange chain: UTXO asset exchange.
    X,
    /// Contract chain: EVM smart contracts.
    C,
    /// Quantum chain: post-quantum cryptography.
    Q,
    /// Attestation chain: oracles and compute attestation.
    A,
    /// Bridge chain: cross-chain interop.
    B,
    /// Threshold chain: FHE and threshold crypto.
    T,
    /// Zero-knowledge proof chain.
    Z,
    /// Graph chain.
    G,
    /// Key management chain.
    K,
    /// Native DEX chain.
    D,
}

/// Alias → chain. Matching is case-sensitive; each chain accepts its
/// letter and one full-word spelling.
const ALIASES: &[(&str, Chain)] = &[
    ("P", Chain::P),
    ("platform", Chain::P),
    ("X", Chain::X),
    ("exchange", Chain::X),
    ("C", Chain::C),
    ("contract", Chain::C),
    ("Q", Chain::Q),
    ("quantum", Chain::Q),
    ("A", Chain::A),
    ("attestation", Chain::A),
    ("B", Chain::B),
    ("bridge", Chain::B),
    ("T", Chain::T),
    ("threshold", Chain::T),
    ("Z", Chain::Z),
    ("zk", Chain::Z),
    ("G", Chain::G),
    ("graph", Chain::G),
    ("K", Chain::K),
    ("kms", Chain::K),
    ("D", Chain::D),
    ("dex", Chain::D),
];

impl Chain {
    /// Every chain, in `ChainConfig` field order.
    pub const ALL: [Chain; 11] = [
        Chain::P,
        Chain::X,
        Chain::C,
        Chain::Q,
        Chain::A,
        Chain::B,
        Chain::T,
        Chain::Z,
        Chain::G,
        Chain::K,
        Chain::D,
    ];

    /// Resolve a chain from one of its accepted spellings.
    pub fn from_alias(alias: &str) -> Option<Chain> {
        ALIASES
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, chain)| *chain)
    }

    /// All spellings accepted by [`Chain::from_alias`].
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        ALIASES.iter().map(|(name, _)| *name)
    }

    pub const fn letter(self) -> char {
        match self {
            Chain::P => 'P',
            Chain::X => 'X',
            Chain::C => 'C',
            Chain::Q => 'Q',
            Chain::A => 'A',
            Chain::B => 'B',
            Chain::T => 'T',
            Chain::Z => 'Z',
            Chain::G => 'G',
            Chain::K => 'K',
            Chain::D => 'D',
        }
    }

    /// Full-word spelling, e.g. `"platform"`.
    pub const fn name(self) -> &'static str {
        match self {
            Chain::P => "platform",
            Chain::X => "exchange",
            Chain::C => "contract",
            Chain::Q => "quantum",
            Chain::A => "attestation",
            Chain::B => "bridge",
            Chain::T => "threshold",
            Chain::Z => "zk",
            Chain::G => "graph",
            Chain::K => "kms",
            Chain::D => "dex",
        }
    }

    /// The well-known native identifier for this chain.
    pub const fn native_id(self) -> ChainId {
        ChainId::native(self.letter() as u8)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Chain {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::from_alias(s).ok_or_else(|| RegistryError::UnknownChain {
            name: s.to_string(),
        })
    }
}

/// Well-known native chain IDs.
pub mod chains {
    use super::Chain;
    use crate::id::{ChainId, Id};

    /// The primary network's subnet identifier.
    pub const PRIMARY_NETWORK_ID: Id = Id::EMPTY;

    pub const P_CHAIN_ID: ChainId = Chain::P.native_id();
    pub const X_CHAIN_ID: ChainId = Chain::X.native_id();
    pub const C_CHAIN_ID: ChainId = Chain::C.native_id();
    pub const Q_CHAIN_ID: ChainId = Chain::Q.native_id();
    pub const A_CHAIN_ID: ChainId = Chain::A.native_id();
    pub const B_CHAIN_ID: ChainId = Chain::B.native_id();
    pub const T_CHAIN_ID: ChainId = Chain::T.native_id();
    pub const Z_CHAIN_ID: ChainId = Chain::Z.native_id();
    pub const G_CHAIN_ID: ChainId = Chain::G.native_id();
    pub const K_CHAIN_ID: ChainId = Chain::K.native_id();
    pub const D_CHAIN_ID: ChainId = Chain::D.native_id();

    pub const PLATFORM_CHAIN_ID: ChainId = P_CHAIN_ID;
}
