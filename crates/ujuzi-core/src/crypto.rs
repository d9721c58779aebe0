// crates/ujuzi-core/src/crypto.rs
//
// Hashing and hex helpers, and the opaque content hash that identifies
// submitted material. The registry never computes the hash of submitted
// content itself; it is produced by the external pinning step and only
// stored and checked for uniqueness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::UjuziError;

/// Compute SHA-256 hash of the given bytes.
///
/// Returns a 32-byte hash.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Encode 32 bytes as a `0x`-prefixed lowercase hex string.
pub fn to_prefixed_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a `0x`-prefixed, 64-digit hex string into 32 bytes.
///
/// Returns `None` if the string is not exactly that shape.
pub fn parse_prefixed_hex(s: &str) -> Option<[u8; 32]> {
    let digits = s.strip_prefix("0x")?;
    if digits.len() != 64 {
        return None;
    }
    let decoded = hex::decode(digits).ok()?;
    let mut output = [0u8; 32];
    output.copy_from_slice(&decoded);
    Some(output)
}

/// A fixed-size, content-derived identifier (e.g. a digest of an IPFS CID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// SHA-256 of arbitrary content bytes.
    pub fn of(data: &[u8]) -> Self {
        Self(hash_bytes(data))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefixed_hex(&self.0))
    }
}

/// `0x` + 64 hex digits is taken verbatim; any other string (such as a CID)
/// is hashed.
impl FromStr for ContentHash {
    type Err = UjuziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UjuziError::Serialization(
                "content hash must not be empty".to_string(),
            ));
        }
        Ok(match parse_prefixed_hex(s) {
            Some(bytes) => Self(bytes),
            None => Self::of(s.as_bytes()),
        })
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
