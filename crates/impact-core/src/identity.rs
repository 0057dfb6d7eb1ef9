//! # Domain Identity Newtypes
//!
//! Newtype wrappers for every identifier the registry handles. These
//! prevent accidental identifier confusion: you cannot pass a `CampaignId`
//! where a `DonationId` is expected, or a proof id where a campaign id is.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImpactError;

/// The host ledger's null/burn address. Never accepted as an authority.
pub const BURN_PRINCIPAL: &str = "SP000000000000000000002Q6VF78";

/// An opaque caller identity supplied by the host.
///
/// The registry never authenticates a principal; it only stores and
/// compares them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap a principal string without validation.
    ///
    /// Prefer [`str::parse`] for untrusted input, which rejects empty text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The reserved burn principal.
    pub fn burn() -> Self {
        Self(BURN_PRINCIPAL.to_string())
    }

    /// Whether this is the reserved burn principal.
    pub fn is_burn(&self) -> bool {
        self.0 == BURN_PRINCIPAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ImpactError::EmptyPrincipal);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential identifier allocated by the registry for each proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofId(pub u64);

impl ProofId {
    /// Access the inner counter value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ProofId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "proof:{}", self.0)
    }
}

/// Reference to the fundraising campaign a proof is evidence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(u64);

/// Reference to the donation a proof is evidence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationId(u64);

macro_rules! positive_id {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Accept a raw signed reference, rejecting zero, negatives and
            /// values beyond `u64::MAX`.
            pub fn new(raw: i128) -> Result<Self, ImpactError> {
                match u64::try_from(raw) {
                    Ok(v) if v > 0 => Ok(Self(v)),
                    _ => Err(ImpactError::NonPositiveId {
                        kind: $kind,
                        value: raw,
                    }),
                }
            }

            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(CampaignId, "campaign id");
positive_id!(DonationId, "donation id");
