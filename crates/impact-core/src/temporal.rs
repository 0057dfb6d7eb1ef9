//! # Ledger Time
//!
//! `LedgerTime` is the host's monotonic time value: a block height on a
//! ledger, or a logical/Unix-second timestamp on a conventional service.
//! The registry never interprets it; it stamps proofs and verifications
//! with whatever the Clock Source reports.

use serde::{Deserialize, Serialize};

/// A monotonically non-decreasing host time value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LedgerTime(pub u64);

impl LedgerTime {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LedgerTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
