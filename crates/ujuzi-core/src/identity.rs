// crates/ujuzi-core/src/identity.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::{hash_bytes, parse_prefixed_hex, to_prefixed_hex};
use crate::error::UjuziError;

/// An authenticated caller identity (e.g. a wallet address).
///
/// The hosting environment authenticates callers; the registry only compares
/// principals for equality and uses them as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Principal(pub [u8; 32]);

impl Principal {
    /// Derive a principal from a human-readable account label.
    ///
    /// The identity is SHA-256(label). Used for genesis accounts, the
    /// registry's own account, scripts, and tests.
    pub fn from_label(label: &str) -> Self {
        Self(hash_bytes(label.as_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First six bytes in hex, for tables and log lines.
    pub fn short(&self) -> String {
        format!("0x{}", hex::encode(&self.0[..6]))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefixed_hex(&self.0))
    }
}

/// `0x` + 64 hex digits parses verbatim; any other non-empty string is an
/// account label.
impl FromStr for Principal {
    type Err = UjuziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UjuziError::Serialization(
                "principal must not be empty".to_string(),
            ));
        }
        Ok(match parse_prefixed_hex(s) {
            Some(bytes) => Self(bytes),
            None => Self::from_label(s),
        })
    }
}

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_derivation_is_stable() {
        assert_eq!(Principal::from_label("alice"), Principal::from_label("alice"));
        assert_ne!(Principal::from_label("alice"), Principal::from_label("bob"));
    }

    #[test]
    fn test_parse_label_and_hex() {
        let alice: Principal = "alice".parse().unwrap();
        assert_eq!(alice, Principal::from_label("alice"));

        let hex_form: Principal = alice.to_string().parse().unwrap();
        assert_eq!(hex_form, alice);
    }

    #[test]
    fn test_short_form() {
        let p = Principal([0xffu8; 32]);
        assert_eq!(p.short(), "0xffffffffffff");
    }

    #[test]
    fn test_principal_as_json_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Principal::from_label("v1"), 3u32);
        let json = serde_json::to_string(&map).unwrap();
        let back: std::collections::BTreeMap<Principal, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
