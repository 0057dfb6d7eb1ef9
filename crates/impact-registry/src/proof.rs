//! # Proof and Verification Records
//!
//! A [`Proof`] is created once by submission and never destroyed. Its
//! evidence fields are private and read-only; the only mutable field is
//! `status`, which the registry updates when a verification is recorded.
//! A [`Verification`] is the most recent verdict on a proof and is
//! replaced, not appended, on re-verification.

use serde::{Deserialize, Serialize};

use impact_core::{CampaignId, DonationId, LedgerTime, Metadata, Principal, ProofHash, ProofType};

/// Raw submission input, exactly as the caller supplied it.
///
/// Fields are unvalidated: the registry checks them in a fixed order so
/// that the first failing rule determines the reported error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofSubmission {
    pub hash: String,
    pub campaign_id: i128,
    pub donation_id: i128,
    pub proof_type: String,
    pub metadata: String,
}

impl ProofSubmission {
    pub fn new(
        hash: impl Into<String>,
        campaign_id: i128,
        donation_id: i128,
        proof_type: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            campaign_id,
            donation_id,
            proof_type: proof_type.into(),
            metadata: metadata.into(),
        }
    }
}

/// A registered impact proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    hash: ProofHash,
    campaign_id: CampaignId,
    donation_id: DonationId,
    proof_type: ProofType,
    metadata: Metadata,
    timestamp: LedgerTime,
    submitter: Principal,
    /// Current validity verdict. `true` at creation, then whatever the
    /// latest verification recorded.
    pub(crate) status: bool,
}

impl Proof {
    pub(crate) fn new(
        hash: ProofHash,
        campaign_id: CampaignId,
        donation_id: DonationId,
        proof_type: ProofType,
        metadata: Metadata,
        timestamp: LedgerTime,
        submitter: Principal,
    ) -> Self {
        Self {
            hash,
            campaign_id,
            donation_id,
            proof_type,
            metadata,
            timestamp,
            submitter,
            status: true,
        }
    }

    pub fn hash(&self) -> &ProofHash {
        &self.hash
    }

    pub fn campaign_id(&self) -> CampaignId {
        self.campaign_id
    }

    pub fn donation_id(&self) -> DonationId {
        self.donation_id
    }

    pub fn proof_type(&self) -> ProofType {
        self.proof_type
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Ledger time at submission.
    pub fn timestamp(&self) -> LedgerTime {
        self.timestamp
    }

    pub fn submitter(&self) -> &Principal {
        &self.submitter
    }

    pub fn status(&self) -> bool {
        self.status
    }
}

/// The latest verdict recorded against a proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verifier: Principal,
    pub verification_timestamp: LedgerTime,
    pub is_valid: bool,
}
