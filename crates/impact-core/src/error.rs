//! # Error Types
//!
//! Construction errors for the validated domain types in this crate.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Registry operations report their own error kinds (see
//! `impact_registry::RegistryError`); this type only describes why a raw
//! input could not become a domain value.

use thiserror::Error;

/// Error raised when raw input cannot be converted into a domain type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImpactError {
    /// Proof hash is empty or longer than the encoded-form bound.
    #[error("proof hash must be 1..={max} characters, got {len}")]
    InvalidHash {
        /// Character length of the rejected hash.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// Metadata exceeds the character bound.
    #[error("metadata must be at most {max} characters, got {len}")]
    MetadataTooLong {
        /// Character length of the rejected metadata.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// A campaign or donation reference was zero or negative.
    #[error("{kind} must be a positive integer, got {value}")]
    NonPositiveId {
        /// Which identifier namespace was rejected ("campaign id", "donation id").
        kind: &'static str,
        /// The rejected value.
        value: i128,
    },

    /// Proof type is not one of `photo`, `report`, `video`.
    #[error("unknown proof type {0:?}; expected one of photo, report, video")]
    UnknownProofType(String),

    /// Principal text was empty.
    #[error("principal must not be empty")]
    EmptyPrincipal,
}
