use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use sha1::digest::generic_array::GenericArray;
use sha1::digest::generic_array::typenum::U20;

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest rendered as hex.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A 160-bit SHA-1 digest.
///
/// Renders as 40 lowercase hex characters, most significant byte first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha1Digest([u8; DIGEST_LEN]);

impl Sha1Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex, e.g. `a9993e364706816aba3e25717850c26c9cd0d89d`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<GenericArray<u8, U20>> for Sha1Digest {
    fn from(value: GenericArray<u8, U20>) -> Self {
        Self(value.into())
    }
}

impl From<[u8; DIGEST_LEN]> for Sha1Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1Digest({self:x})")
    }
}

impl fmt::LowerHex for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::UpperHex for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl FromStr for Sha1Digest {
    type Err = HashError;

    /// Accepts exactly 40 hex characters in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HEX_LEN {
            return Err(HashError::InvalidDigest(s.to_string()));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| HashError::InvalidDigest(s.to_string()))?;

        Ok(Self(bytes))
    }
}

impl Serialize for Sha1Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha1Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
