//! # Validated Proof Content
//!
//! `ProofHash` and `Metadata` wrap caller-supplied text and enforce the
//! registry's length bounds at construction. Lengths are counted in
//! characters (Unicode scalar values), not bytes: the bound applies to the
//! encoded form the caller submits, whatever hash algorithm produced it.

use serde::{Deserialize, Serialize};

use crate::error::ImpactError;

/// Maximum length of a proof hash, in characters.
pub const MAX_HASH_LEN: usize = 64;

/// Maximum length of proof metadata, in characters.
pub const MAX_METADATA_LEN: usize = 256;

/// Caller-supplied content hash identifying a proof's evidence.
///
/// Non-empty and at most [`MAX_HASH_LEN`] characters. The registry treats
/// the value as opaque; equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProofHash(String);

impl ProofHash {
    pub fn new(value: impl Into<String>) -> Result<Self, ImpactError> {
        let value = value.into();
        let len = value.chars().count();
        if len == 0 || len > MAX_HASH_LEN {
            return Err(ImpactError::InvalidHash {
                len,
                max: MAX_HASH_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProofHash {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProofHash> for String {
    fn from(hash: ProofHash) -> Self {
        hash.0
    }
}

impl std::borrow::Borrow<str> for ProofHash {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProofHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text description attached to a proof. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Metadata(String);

impl Metadata {
    pub fn new(value: impl Into<String>) -> Result<Self, ImpactError> {
        let value = value.into();
        let len = value.chars().count();
        if len > MAX_METADATA_LEN {
            return Err(ImpactError::MetadataTooLong {
                len,
                max: MAX_METADATA_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Metadata {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Metadata> for String {
    fn from(metadata: Metadata) -> Self {
        metadata.0
    }
}
