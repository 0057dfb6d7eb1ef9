//! # Content Digest — Evidence Hashing for Hosts
//!
//! The registry treats proof hashes as opaque caller-supplied strings and
//! never hashes anything itself. Hosts and tooling that need to derive a
//! proof hash from evidence bytes use this module: the lowercase hex form
//! of a SHA-256 digest is exactly [`MAX_HASH_LEN`](crate::MAX_HASH_LEN)
//! characters, so it always satisfies the registry's hash bound.

use std::io::Read;

use sha2::{Digest, Sha256};

use crate::content::ProofHash;
use crate::error::ImpactError;

/// A SHA-256 digest of evidence content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// The hex digest as a registry proof hash.
    pub fn to_proof_hash(&self) -> Result<ProofHash, ImpactError> {
        ProofHash::new(self.to_hex())
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute the SHA-256 digest of an in-memory buffer.
pub fn sha256_digest(data: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest { bytes }
}

/// Compute the SHA-256 digest of a stream without buffering it whole.
pub fn sha256_reader<R: Read>(mut reader: R) -> std::io::Result<ContentDigest> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    Ok(ContentDigest { bytes })
}

/// Compute a SHA-256 hex string from raw bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256_digest(data).to_hex()
}
