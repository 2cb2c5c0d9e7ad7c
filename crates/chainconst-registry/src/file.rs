//! Registry override files.
//!
//! A YAML (or JSON) document listing per-network chain IDs that replace the
//! built-in defaults:
//!
//! ```yaml
//! networks:
//!   - network_id: 1
//!     chains:
//!       C: "0x0000000000000000000000000000000000000000000000000000000000000043"
//!       quantum: "0x…"
//! ```
//!
//! Chains may be keyed by any alias `Chain::from_alias` accepts. Networks
//! without a registered config start from the mainnet IDs.

use chainconst_core::{error::ConfigError, Chain, ChainConfig, ChainId, ChainLookup, NetworkId};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tracing::debug;

use crate::memory::ChainRegistry;

/// Chain ID overrides for one network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkOverride {
    pub network_id: NetworkId,
    /// alias → hex chain ID
    #[serde(default)]
    pub chains: BTreeMap<String, String>,
}

/// Top-level override document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub networks: Vec<NetworkOverride>,
}

impl RegistryFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a YAML or JSON document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve every override against `base`, without touching any registry.
    /// The whole file is validated before anything is returned.
    ///
    /// Entries naming the same network are layered in file order onto a
    /// single config; one config per distinct network, in order of first
    /// appearance.
    pub fn resolve(
        &self,
        base: impl Fn(NetworkId) -> ChainConfig,
    ) -> Result<Vec<ChainConfig>, ConfigError> {
        let mut merged: Vec<ChainConfig> = Vec::with_capacity(self.networks.len());
        for entry in &self.networks {
            match merged.iter_mut().find(|c| c.network_id == entry.network_id) {
                Some(config) => *config = entry.resolve(*config)?,
                None => merged.push(entry.resolve(base(entry.network_id))?),
            }
        }
        Ok(merged)
    }
}

impl NetworkOverride {
    fn resolve(&self, mut config: ChainConfig) -> Result<ChainConfig, ConfigError> {
        for (alias, hex) in &self.chains {
            let chain = Chain::from_alias(alias).ok_or_else(|| ConfigError::UnknownChain {
                network_id: self.network_id,
                name: alias.clone(),
            })?;
            let id: ChainId = hex.parse().map_err(|source| ConfigError::InvalidChainId {
                network_id: self.network_id,
                chain: alias.clone(),
                source,
            })?;
            config.set(chain, id);
        }
        Ok(config)
    }
}

impl ChainRegistry {
    /// Apply an override document. Each listed network is registered
    /// (replacing any existing entry); migration callbacks do not fire.
    /// Returns the number of distinct networks registered.
    ///
    /// Nothing is registered if any entry is invalid.
    pub fn apply_file(&self, file: &RegistryFile) -> Result<usize, ConfigError> {
        let configs = file.resolve(|network_id| self.get_or_default(network_id))?;
        let count = configs.len();
        for config in configs {
            self.register_config(config);
        }
        debug!(networks = count, "applied registry overrides");
        Ok(count)
    }

    /// Read and apply an override file from disk.
    pub fn load_file(&self, path: &Path) -> Result<usize, ConfigError> {
        let file = RegistryFile::from_path(path)?;
        self.apply_file(&file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainconst_core::{network::MAINNET_ID, Id};

    fn hex(tag: &str) -> String {
        Id::from_tag(tag.as_bytes()).to_hex()
    }

    #[test]
    fn yaml_overrides_one_chain() {
        let doc = format!(
            "networks:\n  - network_id: 1\n    chains:\n      C: \"{}\"\n",
            hex("c-next")
        );
        let reg = ChainRegistry::with_defaults();
        let n = reg.apply_file(&RegistryFile::parse(&doc).unwrap()).unwrap();
        assert_eq!(n, 1);

        let config = reg.get_config(MAINNET_ID).unwrap();
        assert_eq!(config.c_chain_id, Id::from_tag(b"c-next"));
        assert_eq!(config.diff(&ChainConfig::mainnet()), vec![Chain::C]);
    }

    #[test]
    fn json_is_accepted() {
        let doc = serde_json::json!({
            "networks": [{ "network_id": 500, "chains": { "dex": hex("d5") } }]
        })
        .to_string();
        let reg = ChainRegistry::new();
        reg.apply_file(&RegistryFile::parse(&doc).unwrap()).unwrap();

        let config = reg.get_config(500).unwrap();
        assert_eq!(config.d_chain_id, Id::from_tag(b"d5"));
        assert_eq!(config.p_chain_id, Chain::P.native_id());
    }

    #[test]
    fn unknown_alias_aborts_whole_file() {
        let doc = format!(
            "networks:\n  - network_id: 10\n    chains:\n      P: \"{}\"\n  - network_id: 11\n    chains:\n      W: \"{}\"\n",
            hex("p"),
            hex("w")
        );
        let reg = ChainRegistry::new();
        let err = reg
            .apply_file(&RegistryFile::parse(&doc).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownChain { network_id: 11, ref name } if name == "W"
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn bad_hex_is_reported() {
        let doc = "networks:\n  - network_id: 3\n    chains:\n      X: \"0x1234\"\n";
        let err = RegistryFile::parse(doc)
            .unwrap()
            .resolve(ChainConfig::fallback)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChainId { network_id: 3, .. }));
    }

    #[test]
    fn repeated_network_entries_merge() {
        let doc = format!(
            "networks:\n  - network_id: 1\n    chains:\n      C: \"{}\"\n  - network_id: 1\n    chains:\n      Q: \"{}\"\n",
            hex("c-next"),
            hex("q-next")
        );
        let reg = ChainRegistry::with_defaults();
        let n = reg.apply_file(&RegistryFile::parse(&doc).unwrap()).unwrap();
        assert_eq!(n, 1);

        let config = reg.get_config(MAINNET_ID).unwrap();
        assert_eq!(config.diff(&ChainConfig::mainnet()), vec![Chain::C, Chain::Q]);
        assert_eq!(config.c_chain_id, Id::from_tag(b"c-next"));
        assert_eq!(config.q_chain_id, Id::from_tag(b"q-next"));
    }

    #[test]
    fn later_entry_wins_for_same_chain() {
        let doc = format!(
            "networks:\n  - network_id: 9\n    chains:\n      X: \"{}\"\n  - network_id: 8\n    chains:\n      X: \"{}\"\n  - network_id: 9\n    chains:\n      exchange: \"{}\"\n",
            hex("x-first"),
            hex("x-other"),
            hex("x-last")
        );
        let configs = RegistryFile::parse(&doc)
            .unwrap()
            .resolve(ChainConfig::fallback)
            .unwrap();
        assert_eq!(
            configs.iter().map(|c| c.network_id).collect::<Vec<_>>(),
            vec![9, 8]
        );
        assert_eq!(configs[0].x_chain_id, Id::from_tag(b"x-last"));
    }

    #[test]
    fn load_file_reads_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "networks:\n  - network_id: 2\n    chains:\n      graph: \"{}\"\n",
            hex("g-next")
        )
        .unwrap();
        file.flush().unwrap();

        let reg = ChainRegistry::with_defaults();
        assert_eq!(reg.load_file(file.path()).unwrap(), 1);

        let config = reg.get_config(2).unwrap();
        assert_eq!(config.g_chain_id, Id::from_tag(b"g-next"));
        assert_eq!(config.diff(&ChainConfig::testnet()), vec![Chain::G]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let reg = ChainRegistry::new();
        let err = reg.load_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(reg.is_empty());
    }

    #[test]
    fn malformed_document() {
        assert!(matches!(
            RegistryFile::parse("networks: [ {"),
            Err(ConfigError::Parse(_))
        ));
    }
}
