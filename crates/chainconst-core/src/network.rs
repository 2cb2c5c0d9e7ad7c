//! Network identifiers, names, and bech32 address prefixes.

use crate::error::ParseNetworkError;

/// Identifier of a logical network (mainnet, testnet, ...).
pub type NetworkId = u32;

// Network IDs of the primary network.
pub const MAINNET_ID: NetworkId = 1;
pub const TESTNET_ID: NetworkId = 2;
pub const DEVNET_ID: NetworkId = 3;
/// Local development network. Shares its value with [`CUSTOM_CHAIN_ID`].
pub const CUSTOM_ID: NetworkId = 1337;
pub const UNIT_TEST_ID: NetworkId = 369;

// EVM chain IDs of the contract chain, as wallets see them.
pub const MAINNET_CHAIN_ID: NetworkId = 96369;
pub const TESTNET_CHAIN_ID: NetworkId = 96368;
pub const DEVNET_CHAIN_ID: NetworkId = 96370;
pub const CUSTOM_CHAIN_ID: NetworkId = 1337;

// Quantum chain network IDs.
pub const Q_CHAIN_MAINNET_ID: NetworkId = 36963;
pub const Q_CHAIN_TESTNET_ID: NetworkId = 36962;

pub const MAINNET_NAME: &str = "mainnet";
pub const TESTNET_NAME: &str = "testnet";
pub const DEVNET_NAME: &str = "devnet";
pub const CUSTOM_NAME: &str = "custom";
pub const UNIT_TEST_NAME: &str = "testing";

pub const MAINNET_HRP: &str = "lux";
pub const TESTNET_HRP: &str = "test";
pub const DEVNET_HRP: &str = "dev";
pub const CUSTOM_HRP: &str = "custom";
pub const UNIT_TEST_HRP: &str = "testing";

/// Prefix accepted (and produced) for networks without a well-known name.
pub const NETWORK_PREFIX: &str = "network-";

/// Network and EVM chain IDs → display name.
const ID_TO_NAME: &[(NetworkId, &str)] = &[
    (MAINNET_ID, MAINNET_NAME),
    (TESTNET_ID, TESTNET_NAME),
    (DEVNET_ID, DEVNET_NAME),
    (CUSTOM_ID, CUSTOM_NAME),
    (UNIT_TEST_ID, UNIT_TEST_NAME),
    (MAINNET_CHAIN_ID, MAINNET_NAME),
    (TESTNET_CHAIN_ID, TESTNET_NAME),
    (DEVNET_CHAIN_ID, DEVNET_NAME),
];

const NAME_TO_ID: &[(&str, NetworkId)] = &[
    (MAINNET_NAME, MAINNET_ID),
    (TESTNET_NAME, TESTNET_ID),
    (DEVNET_NAME, DEVNET_ID),
    (CUSTOM_NAME, CUSTOM_ID),
    (UNIT_TEST_NAME, UNIT_TEST_ID),
];

const ID_TO_HRP: &[(NetworkId, &str)] = &[
    (MAINNET_ID, MAINNET_HRP),
    (TESTNET_ID, TESTNET_HRP),
    (DEVNET_ID, DEVNET_HRP),
    (CUSTOM_ID, CUSTOM_HRP),
    (UNIT_TEST_ID, UNIT_TEST_HRP),
    (MAINNET_CHAIN_ID, MAINNET_HRP),
    (TESTNET_CHAIN_ID, TESTNET_HRP),
    (DEVNET_CHAIN_ID, DEVNET_HRP),
];

const HRP_TO_ID: &[(&str, NetworkId)] = &[
    (MAINNET_HRP, MAINNET_ID),
    (TESTNET_HRP, TESTNET_ID),
    (DEVNET_HRP, DEVNET_ID),
    (CUSTOM_HRP, CUSTOM_ID),
    (UNIT_TEST_HRP, UNIT_TEST_ID),
];

/// Networks that must run with production-grade settings.
pub const PRODUCTION_NETWORK_IDS: &[NetworkId] =
    &[MAINNET_ID, TESTNET_ID, MAINNET_CHAIN_ID, TESTNET_CHAIN_ID];

/// Networks the registry is pre-populated with.
pub const WELL_KNOWN_NETWORK_IDS: &[NetworkId] = &[MAINNET_ID, TESTNET_ID, DEVNET_ID, CUSTOM_ID];

fn lookup_name(table: &[(&str, NetworkId)], key: &str) -> Option<NetworkId> {
    table.iter().find(|(k, _)| *k == key).map(|(_, id)| *id)
}

/// Human readable name for a network, falling back to `network-<id>`.
pub fn network_name(network_id: NetworkId) -> String {
    ID_TO_NAME
        .iter()
        .find(|(id, _)| *id == network_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("{NETWORK_PREFIX}{network_id}"))
}

/// Resolve a network by name (case-insensitive), `network-<id>`, or a bare
/// decimal ID.
pub fn network_id(name: &str) -> Result<NetworkId, ParseNetworkError> {
    let name = name.to_lowercase();
    if let Some(id) = lookup_name(NAME_TO_ID, &name) {
        return Ok(id);
    }
    let digits = name.strip_prefix(NETWORK_PREFIX).unwrap_or(&name);
    digits
        .parse::<NetworkId>()
        .map_err(|_| ParseNetworkError { input: name.clone() })
}

/// Bech32 human-readable prefix for a network. Unknown networks use the
/// custom prefix.
pub fn hrp(network_id: NetworkId) -> &'static str {
    ID_TO_HRP
        .iter()
        .find(|(id, _)| *id == network_id)
        .map(|(_, hrp)| *hrp)
        .unwrap_or(CUSTOM_HRP)
}

/// Reverse of [`hrp`] for the well-known prefixes.
pub fn network_id_from_hrp(hrp: &str) -> Option<NetworkId> {
    lookup_name(HRP_TO_ID, hrp)
}

pub fn is_production(network_id: NetworkId) -> bool {
    PRODUCTION_NETWORK_IDS.contains(&network_id)
}
