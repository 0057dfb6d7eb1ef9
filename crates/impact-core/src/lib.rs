//! # impact-core — Foundational Types for the Impact Proof Registry
//!
//! Defines the type-system primitives shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Principal`, `ProofId`,
//!    `CampaignId`, `DonationId`: no bare strings or integers for identifiers.
//!
//! 2. **Validated content types.** `ProofHash` and `Metadata` can only be
//!    constructed within their length bounds, so a stored proof can never
//!    carry an out-of-range hash or oversized metadata.
//!
//! 3. **Closed `ProofType` enum.** Exactly three variants, parsed
//!    case-sensitively. Invalid proof types are unrepresentable.
//!
//! 4. **Host-supplied time.** `LedgerTime` is an opaque monotonic counter
//!    (block height or logical timestamp) used verbatim.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `impact-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod content;
pub mod digest;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use content::{Metadata, ProofHash, MAX_HASH_LEN, MAX_METADATA_LEN};
pub use digest::{sha256_digest, sha256_hex, sha256_reader, ContentDigest};
pub use domain::ProofType;
pub use error::ImpactError;
pub use identity::{CampaignId, DonationId, Principal, ProofId, BURN_PRINCIPAL};
pub use temporal::LedgerTime;
