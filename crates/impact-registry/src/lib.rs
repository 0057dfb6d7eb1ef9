//! # impact-registry — Impact Proof Registry State Machine
//!
//! Records impact proofs (evidence submitted against a campaign/donation
//! pair) and tracks their verification outcome.
//!
//! ## Components
//!
//! - **Registry** (`registry.rs`): the single state object. Owns the proof
//!   table, the hash index, the verification overlay, the identifier
//!   counter, and the write-once authority.
//!
//! - **Host collaborators** (`host.rs`): `IdentitySource` and `ClockSource`
//!   traits through which the host supplies the caller and the current
//!   ledger time, with stock implementations.
//!
//! - **Shared registry** (`shared.rs`): one exclusive lock around the whole
//!   state for hosts that serve calls concurrently.
//!
//! ## Design
//!
//! Mutating operations take `&mut self`, so the single-writer discipline is
//! enforced by the borrow checker rather than by convention. Every
//! operation validates fully before touching state: a failed call leaves
//! the registry exactly as it found it.
//!
//! The registry performs no logging; callers surface error kinds to their
//! own users.

pub mod config;
pub mod error;
pub mod host;
pub mod proof;
pub mod registry;
pub mod shared;

pub use config::{RegistryConfig, DEFAULT_MAX_PROOFS};
pub use error::{InconsistentSnapshot, RegistryError};
pub use host::{CallContext, ClockSource, FixedIdentity, Host, IdentitySource, ManualClock, SystemClock};
pub use proof::{Proof, ProofSubmission, Verification};
pub use registry::ProofRegistry;
pub use shared::SharedRegistry;
