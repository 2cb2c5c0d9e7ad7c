//! Fixed-length opaque identifiers.

use crate::error::ParseIdError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Byte length of every [`Id`].
pub const ID_LEN: usize = 32;

/// A 32-byte content-addressed identifier.
///
/// The registry never inspects these bytes; it only stores them and hands
/// them back. Rendered as `0x`-prefixed lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id([u8; ID_LEN]);

/// Identifier of one chain within a network.
pub type ChainId = Id;

/// Identifier of a virtual machine implementation.
pub type VmId = Id;

impl Id {
    /// The all-zero identifier.
    pub const EMPTY: Id = Id([0u8; ID_LEN]);

    pub const fn new(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Native chain pattern: all zeroes except the last byte, which holds
    /// the chain letter.
    pub const fn native(letter: u8) -> Self {
        let mut bytes = [0u8; ID_LEN];
        bytes[ID_LEN - 1] = letter;
        Self(bytes)
    }

    /// ASCII tag left-aligned and zero-padded. Tags longer than 32 bytes
    /// are truncated.
    pub const fn from_tag(tag: &[u8]) -> Self {
        let mut bytes = [0u8; ID_LEN];
        let mut i = 0;
        while i < tag.len() && i < ID_LEN {
            bytes[i] = tag[i];
            i += 1;
        }
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; ID_LEN]
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({self})")
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|e| ParseIdError::InvalidHex {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let bytes: [u8; ID_LEN] = raw
            .as_slice()
            .try_into()
            .map_err(|_| ParseIdError::InvalidLength {
                expected: ID_LEN,
                got: raw.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
