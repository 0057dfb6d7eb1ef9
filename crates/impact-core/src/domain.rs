//! # Proof Type — Closed Evidence Taxonomy
//!
//! Defines the `ProofType` enum: the three kinds of evidence a submitter
//! can register. Every `match` on `ProofType` must be exhaustive, so adding
//! a kind forces every consumer to handle it at compile time.
//!
//! Raw text is converted with [`FromStr`], which is exact and
//! case-sensitive: `"photo"` parses, `"Photo"` does not.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ImpactError;

/// The kind of evidence a proof carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofType {
    /// Photographic evidence of delivered impact.
    Photo,
    /// A written report.
    Report,
    /// Video evidence.
    Video,
}

impl ProofType {
    /// Returns all proof types in canonical order.
    pub fn all() -> &'static [ProofType] {
        &[Self::Photo, Self::Report, Self::Video]
    }

    /// Returns the lowercase identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Report => "report",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for ProofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProofType {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(Self::Photo),
            "report" => Ok(Self::Report),
            "video" => Ok(Self::Video),
            other => Err(ImpactError::UnknownProofType(other.to_string())),
        }
    }
}
