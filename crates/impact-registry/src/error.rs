//! # Registry Errors
//!
//! Every failure a registry operation can report. All are expected,
//! deterministic outcomes: the same inputs against the same state always
//! produce the same error, and a failed call never mutates state.
//!
//! ## Numeric codes
//!
//! Each kind carries the stable numeric code used by the deployed ledger
//! contract, so hosts bridging to that contract can report identical codes.
//!
//! | Code | Kind |
//! |------|------|
//! | 100 | `InvalidAuthority` |
//! | 101 | `InvalidHash` |
//! | 102 | `InvalidCampaign` |
//! | 103 | `InvalidDonation` |
//! | 104 | `DuplicateProof` |
//! | 105 | `ProofNotFound` |
//! | 107 | `InvalidMetadata` |
//! | 108 | `AuthorityNotConfigured` |
//! | 109 | `InvalidProofType` |
//! | 110 | `AlreadyConfigured` |
//! | 111 | `CapacityExceeded` |

use thiserror::Error;

use impact_core::{ProofId, MAX_HASH_LEN, MAX_METADATA_LEN};

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Candidate authority is the reserved burn principal.
    #[error("the burn principal cannot be the registry authority")]
    InvalidAuthority,

    /// Authority has already been set; it is write-once.
    #[error("registry authority is already configured")]
    AlreadyConfigured,

    /// No more proofs can be created.
    #[error("proof capacity of {max_proofs} reached")]
    CapacityExceeded {
        /// The configured capacity.
        max_proofs: u64,
    },

    /// Proof hash is empty or too long.
    #[error("proof hash must be 1..={} characters", MAX_HASH_LEN)]
    InvalidHash,

    /// Campaign reference is not positive.
    #[error("campaign id must be positive")]
    InvalidCampaign,

    /// Donation reference is not positive.
    #[error("donation id must be positive")]
    InvalidDonation,

    /// Proof type is outside the closed set.
    #[error("proof type {0:?} is not one of photo, report, video")]
    InvalidProofType(String),

    /// Metadata is too long.
    #[error("metadata must be at most {} characters", MAX_METADATA_LEN)]
    InvalidMetadata,

    /// Operation requires a configured authority.
    #[error("registry authority is not configured")]
    AuthorityNotConfigured,

    /// A proof with this hash already exists.
    #[error("a proof with hash {hash:?} already exists as {existing}")]
    DuplicateProof {
        /// The rejected hash.
        hash: String,
        /// The proof already registered under it.
        existing: ProofId,
    },

    /// No proof exists with this identifier.
    #[error("{0} not found")]
    ProofNotFound(ProofId),
}

/// A restored snapshot whose tables disagree with each other.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("registry snapshot is inconsistent: hash index, proof table, counter and verifications must agree")]
pub struct InconsistentSnapshot;

impl RegistryError {
    /// Stable numeric code shared with the ledger contract.
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidAuthority => 100,
            Self::InvalidHash => 101,
            Self::InvalidCampaign => 102,
            Self::InvalidDonation => 103,
            Self::DuplicateProof { .. } => 104,
            Self::ProofNotFound(_) => 105,
            Self::InvalidMetadata => 107,
            Self::AuthorityNotConfigured => 108,
            Self::InvalidProofType(_) => 109,
            Self::AlreadyConfigured => 110,
            Self::CapacityExceeded { .. } => 111,
        }
    }

    /// Machine-readable kind, e.g. `"DUPLICATE_PROOF"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAuthority => "INVALID_AUTHORITY",
            Self::AlreadyConfigured => "ALREADY_CONFIGURED",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::InvalidHash => "INVALID_HASH",
            Self::InvalidCampaign => "INVALID_CAMPAIGN",
            Self::InvalidDonation => "INVALID_DONATION",
            Self::InvalidProofType(_) => "INVALID_PROOF_TYPE",
            Self::InvalidMetadata => "INVALID_METADATA",
            Self::AuthorityNotConfigured => "AUTHORITY_NOT_CONFIGURED",
            Self::DuplicateProof { .. } => "DUPLICATE_PROOF",
            Self::ProofNotFound(_) => "PROOF_NOT_FOUND",
        }
    }

    /// Whether the error rejects the shape of the caller's input, as
    /// opposed to a conflict with current registry state.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAuthority
                | Self::InvalidHash
                | Self::InvalidCampaign
                | Self::InvalidDonation
                | Self::InvalidProofType(_)
                | Self::InvalidMetadata
        )
    }
}
