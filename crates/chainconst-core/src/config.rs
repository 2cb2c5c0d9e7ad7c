//! Per-network bundle of chain identifiers.

use crate::chain::Chain;
use crate::id::ChainId;
use crate::network::{NetworkId, CUSTOM_ID, DEVNET_ID, MAINNET_ID, TESTNET_ID};
use serde::{Deserialize, Serialize};

/// The chain IDs active on one network.
///
/// Fields are independent; nothing ties one chain's ID to another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainConfig {
    pub network_id: NetworkId,

    /// Platform chain: staking, validation
    pub p_chain_id: ChainId,
    /// Exchange chain: UTXO asset exchange
    pub x_chain_id: ChainId,
    /// Contract chain: EVM smart contracts
    pub c_chain_id: ChainId,
    /// Quantum chain: post-quantum cryptography
    pub q_chain_id: ChainId,
    /// Attestation chain: oracles, compute attestation
    pub a_chain_id: ChainId,
    /// Bridge chain: cross-chain interop
    pub b_chain_id: ChainId,
    /// Threshold chain: FHE, threshold crypto
    pub t_chain_id: ChainId,
    /// Zero-knowledge proofs
    pub z_chain_id: ChainId,
    /// Graph
    pub g_chain_id: ChainId,
    /// Key management
    pub k_chain_id: ChainId,
    /// Native DEX
    pub d_chain_id: ChainId,
}

impl ChainConfig {
    /// A config for `network_id` using the well-known native chain IDs.
    pub const fn with_defaults(network_id: NetworkId) -> Self {
        Self {
            network_id,
            p_chain_id: Chain::P.native_id(),
            x_chain_id: Chain::X.native_id(),
            c_chain_id: Chain::C.native_id(),
            q_chain_id: Chain::Q.native_id(),
            a_chain_id: Chain::A.native_id(),
            b_chain_id: Chain::B.native_id(),
            t_chain_id: Chain::T.native_id(),
            z_chain_id: Chain::Z.native_id(),
            g_chain_id: Chain::G.native_id(),
            k_chain_id: Chain::K.native_id(),
            d_chain_id: Chain::D.native_id(),
        }
    }

    pub const fn mainnet() -> Self {
        Self::with_defaults(MAINNET_ID)
    }

    pub const fn testnet() -> Self {
        Self::with_defaults(TESTNET_ID)
    }

    pub const fn devnet() -> Self {
        Self::with_defaults(DEVNET_ID)
    }

    pub const fn custom() -> Self {
        Self::with_defaults(CUSTOM_ID)
    }

    /// Mainnet identifiers re-keyed to `network_id`: the fallback for
    /// networks with no registered config.
    pub const fn fallback(network_id: NetworkId) -> Self {
        let mut config = Self::mainnet();
        config.network_id = network_id;
        config
    }

    pub fn get(&self, chain: Chain) -> ChainId {
        match chain {
            Chain::P => self.p_chain_id,
            Chain::X => self.x_chain_id,
            Chain::C => self.c_chain_id,
            Chain::Q => self.q_chain_id,
            Chain::A => self.a_chain_id,
            Chain::B => self.b_chain_id,
            Chain::T => self.t_chain_id,
            Chain::Z => self.z_chain_id,
            Chain::G => self.g_chain_id,
            Chain::K => self.k_chain_id,
            Chain::D => self.d_chain_id,
        }
    }

    /// Replace one chain's ID, leaving every other field untouched.
    pub fn set(&mut self, chain: Chain, id: ChainId) {
        let slot = match chain {
            Chain::P => &mut self.p_chain_id,
            Chain::X => &mut self.x_chain_id,
            Chain::C => &mut self.c_chain_id,
            Chain::Q => &mut self.q_chain_id,
            Chain::A => &mut self.a_chain_id,
            Chain::B => &mut self.b_chain_id,
            Chain::T => &mut self.t_chain_id,
            Chain::Z => &mut self.z_chain_id,
            Chain::G => &mut self.g_chain_id,
            Chain::K => &mut self.k_chain_id,
            Chain::D => &mut self.d_chain_id,
        };
        *slot = id;
    }

    /// `(chain, id)` pairs in field order.
    pub fn entries(&self) -> impl Iterator<Item = (Chain, ChainId)> + '_ {
        Chain::ALL.into_iter().map(move |chain| (chain, self.get(chain)))
    }

    /// Chains whose ID differs between `self` and `other`.
    pub fn diff(&self, other: &ChainConfig) -> Vec<Chain> {
        Chain::ALL
            .into_iter()
            .filter(|&chain| self.get(chain) != other.get(chain))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn defaults_use_native_ids() {
        let config = ChainConfig::mainnet();
        assert_eq!(config.network_id, MAINNET_ID);
        for (chain, id) in config.entries() {
            assert_eq!(id, chain.native_id());
        }
    }

    #[test]
    fn fallback_matches_mainnet_except_network() {
        let config = ChainConfig::fallback(4242);
        assert_eq!(config.network_id, 4242);
        assert!(config.diff(&ChainConfig::mainnet()).is_empty());
    }

    #[test]
    fn set_touches_one_field() {
        let before = ChainConfig::devnet();
        let mut after = before;
        after.set(Chain::Q, Id::from_tag(b"q2"));
        assert_eq!(after.q_chain_id, Id::from_tag(b"q2"));
        assert_eq!(after.diff(&before), vec![Chain::Q]);
    }

    #[test]
    fn get_and_set_agree_for_every_chain() {
        let mut config = ChainConfig::custom();
        for (i, chain) in Chain::ALL.into_iter().enumerate() {
            let id = Id::from_tag(&[b'n', i as u8 + 1]);
            config.set(chain, id);
            assert_eq!(config.get(chain), id);
        }
        assert_eq!(config.diff(&ChainConfig::custom()).len(), Chain::ALL.len());
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(ChainConfig::testnet()).unwrap();
        assert_eq!(json["network_id"], 2);
        assert_eq!(
            json["c_chain_id"].as_str().unwrap(),
            Chain::C.native_id().to_hex()
        );
    }
}
