//! One-way hashing of reviewer IP addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Context string for deriving the IP hashing key from the configured salt.
const KEY_CONTEXT: &str = "mulaboard 2024 reviewer ip hash v1";

/// Hex-encoded keyed hash of a reviewer IP. Never holds a raw address.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpHash(String);

impl IpHash {
    /// Rehydrate a hash previously produced by [`IpHasher`] (storage reads).
    pub fn from_stored(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix for log fields.
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(&self.0)
    }
}

impl fmt::Debug for IpHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IpHash({}…)", self.short())
    }
}

impl fmt::Display for IpHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyed blake3 hasher for reviewer IPs.
#[derive(Clone)]
pub struct IpHasher {
    key: [u8; 32],
}

impl IpHasher {
    pub fn new(salt: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, salt.as_bytes()),
        }
    }

    /// Hash a raw IP. Surrounding whitespace is ignored.
    pub fn hash(&self, raw_ip: &str) -> IpHash {
        let digest = blake3::keyed_hash(&self.key, raw_ip.trim().as_bytes());
        IpHash(digest.to_hex().to_string())
    }
}

impl fmt::Debug for IpHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IpHasher { .. }")
    }
}
