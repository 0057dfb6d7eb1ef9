//! # Proof Registry
//!
//! The single state object of the system. Three tightly coupled
//! responsibilities live here: the submission validation pipeline, the
//! hash deduplication index, and the verification overlay.
//!
//! ## State
//!
//! ```text
//! next_proof_id ──▶ allocates ──▶ proofs: ProofId → Proof
//!                                   ▲            │
//!                 proofs_by_hash ───┘            └──▶ verifications: ProofId → Verification
//!                 (hash → ProofId)
//! authority: unset ──(set_authority, once)──▶ Principal
//! ```
//!
//! ## Invariants
//!
//! - The hash index and the proof table move in lockstep: every indexed
//!   hash resolves to a proof carrying that hash.
//! - `next_proof_id` equals the number of proofs ever created. Identifiers
//!   are never reused.
//! - The authority goes from unset to set at most once.
//! - A proof's evidence fields never change; only `status`, only through
//!   verification.
//! - A verification exists only for an existing proof.
//!
//! ## Submission order
//!
//! Checks run in a fixed order and the first failure is reported:
//! capacity, hash, campaign, donation, proof type, metadata, authority,
//! uniqueness. The order is observable (an invalid proof type is reported
//! even when no authority is configured) and must not change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use impact_core::{
    CampaignId, DonationId, Metadata, Principal, ProofHash, ProofId, ProofType,
};

use crate::config::RegistryConfig;
use crate::error::{InconsistentSnapshot, RegistryError};
use crate::host::Host;
use crate::proof::{Proof, ProofSubmission, Verification};

/// The impact proof registry.
///
/// Serializes to a complete snapshot. Deserializing checks the structural
/// invariants and refuses a snapshot that violates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegistrySnapshot")]
pub struct ProofRegistry {
    next_proof_id: ProofId,
    max_proofs: u64,
    authority: Option<Principal>,
    proofs: BTreeMap<ProofId, Proof>,
    proofs_by_hash: BTreeMap<ProofHash, ProofId>,
    verifications: BTreeMap<ProofId, Verification>,
}

/// Unchecked wire form of a [`ProofRegistry`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistrySnapshot {
    next_proof_id: ProofId,
    max_proofs: u64,
    authority: Option<Principal>,
    proofs: BTreeMap<ProofId, Proof>,
    proofs_by_hash: BTreeMap<ProofHash, ProofId>,
    verifications: BTreeMap<ProofId, Verification>,
}

impl TryFrom<RegistrySnapshot> for ProofRegistry {
    type Error = InconsistentSnapshot;

    fn try_from(snapshot: RegistrySnapshot) -> Result<Self, Self::Error> {
        let registry = Self {
            next_proof_id: snapshot.next_proof_id,
            max_proofs: snapshot.max_proofs,
            authority: snapshot.authority,
            proofs: snapshot.proofs,
            proofs_by_hash: snapshot.proofs_by_hash,
            verifications: snapshot.verifications,
        };
        if registry.authority.as_ref().is_some_and(Principal::is_burn) || !registry.is_consistent()
        {
            return Err(InconsistentSnapshot);
        }
        Ok(registry)
    }
}

impl Default for ProofRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofRegistry {
    /// An empty registry with the default capacity.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            next_proof_id: ProofId(0),
            max_proofs: config.max_proofs,
            authority: None,
            proofs: BTreeMap::new(),
            proofs_by_hash: BTreeMap::new(),
            verifications: BTreeMap::new(),
        }
    }

    // ── Authority ───────────────────────────────────────────────────

    /// Configure the registry authority. Succeeds at most once.
    pub fn set_authority(&mut self, candidate: Principal) -> Result<(), RegistryError> {
        if candidate.is_burn() {
            return Err(RegistryError::InvalidAuthority);
        }
        if self.authority.is_some() {
            return Err(RegistryError::AlreadyConfigured);
        }
        self.authority = Some(candidate);
        Ok(())
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Register a new proof and return its identifier.
    ///
    /// The submitter and timestamp come from `host`. New proofs start with
    /// `status == true`.
    pub fn submit_proof(
        &mut self,
        host: &impl Host,
        submission: ProofSubmission,
    ) -> Result<ProofId, RegistryError> {
        let ProofSubmission {
            hash,
            campaign_id,
            donation_id,
            proof_type,
            metadata,
        } = submission;

        if self.next_proof_id.value() >= self.max_proofs {
            return Err(RegistryError::CapacityExceeded {
                max_proofs: self.max_proofs,
            });
        }
        let hash = ProofHash::new(hash).map_err(|_| RegistryError::InvalidHash)?;
        let campaign_id =
            CampaignId::new(campaign_id).map_err(|_| RegistryError::InvalidCampaign)?;
        let donation_id =
            DonationId::new(donation_id).map_err(|_| RegistryError::InvalidDonation)?;
        let proof_type = proof_type
            .parse::<ProofType>()
            .map_err(|_| RegistryError::InvalidProofType(proof_type))?;
        let metadata = Metadata::new(metadata).map_err(|_| RegistryError::InvalidMetadata)?;
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotConfigured);
        }
        if let Some(&existing) = self.proofs_by_hash.get(&hash) {
            return Err(RegistryError::DuplicateProof {
                hash: hash.into(),
                existing,
            });
        }

        // All checks passed; nothing below can fail.
        let id = self.next_proof_id;
        let proof = Proof::new(
            hash.clone(),
            campaign_id,
            donation_id,
            proof_type,
            metadata,
            host.current_time(),
            host.current_identity(),
        );
        self.proofs.insert(id, proof);
        self.proofs_by_hash.insert(hash, id);
        self.next_proof_id = id.next();
        Ok(id)
    }

    // ── Verification ────────────────────────────────────────────────

    /// Record a verdict on an existing proof.
    ///
    /// Requires a configured authority but does not check that the caller
    /// is that authority. Re-verification overwrites the previous verdict.
    pub fn verify_proof(
        &mut self,
        host: &impl Host,
        proof_id: ProofId,
        is_valid: bool,
    ) -> Result<(), RegistryError> {
        let Some(proof) = self.proofs.get_mut(&proof_id) else {
            return Err(RegistryError::ProofNotFound(proof_id));
        };
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotConfigured);
        }
        self.verifications.insert(
            proof_id,
            Verification {
                verifier: host.current_identity(),
                verification_timestamp: host.current_time(),
                is_valid,
            },
        );
        proof.status = is_valid;
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn get_proof(&self, proof_id: ProofId) -> Option<&Proof> {
        self.proofs.get(&proof_id)
    }

    /// Resolve a proof through the hash index. Returns `None` if either
    /// the index or the proof table misses.
    pub fn get_proof_by_hash(&self, hash: &str) -> Option<&Proof> {
        self.get_proof_entry_by_hash(hash).map(|(_, proof)| proof)
    }

    /// Like [`ProofRegistry::get_proof_by_hash`], also yielding the
    /// identifier the hash resolved to.
    pub fn get_proof_entry_by_hash(&self, hash: &str) -> Option<(ProofId, &Proof)> {
        let id = *self.proofs_by_hash.get(hash)?;
        self.proofs.get(&id).map(|proof| (id, proof))
    }

    pub fn get_verification(&self, proof_id: ProofId) -> Option<&Verification> {
        self.verifications.get(&proof_id)
    }

    /// Total proofs ever created.
    pub fn get_proof_count(&self) -> u64 {
        self.next_proof_id.value()
    }

    pub fn is_proof_registered(&self, hash: &str) -> bool {
        self.proofs_by_hash.contains_key(hash)
    }

    pub fn authority(&self) -> Option<&Principal> {
        self.authority.as_ref()
    }

    pub fn max_proofs(&self) -> u64 {
        self.max_proofs
    }

    /// Check the structural invariants. Every deserialized registry has
    /// passed this check.
    pub fn is_consistent(&self) -> bool {
        let index_matches = self.proofs_by_hash.len() == self.proofs.len()
            && self
                .proofs_by_hash
                .iter()
                .all(|(hash, id)| self.proofs.get(id).is_some_and(|p| p.hash() == hash));
        let count_matches = self.proofs.len() as u64 == self.next_proof_id.value()
            && self
                .proofs
                .keys()
                .next_back()
                .map_or(true, |last| *last < self.next_proof_id);
        let verifications_attached = self
            .verifications
            .keys()
            .all(|id| self.proofs.contains_key(id));
        index_matches && count_matches && verifications_attached
    }
}

// ─── Tests ───────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::host::CallContext;
    use impact_core::LedgerTime;
    use proptest::prelude::*;

    fn ctx() -> CallContext {
        CallContext::new(Principal::new("ST1TEST"), LedgerTime(1))
    }

    /// Submissions drawn from a small hash alphabet so duplicates are
    /// common, with occasional invalid fields.
    fn arb_submission() -> impl Strategy<Value = ProofSubmission> {
        (
            "[a-d]{1,2}",
            -1i128..3,
            -1i128..3,
            prop_oneof![Just("photo"), Just("report"), Just("video"), Just("audio")],
        )
            .prop_map(|(hash, c, d, t)| ProofSubmission::new(hash, c, d, t, "m"))
    }

    proptest! {
        /// Successful submissions receive 0, 1, 2, ... regardless of
        /// interleaved failures, and the count tracks successes.
        #[test]
        fn ids_are_dense_and_monotonic(subs in prop::collection::vec(arb_submission(), 0..40)) {
            let mut reg = ProofRegistry::new();
            reg.set_authority(Principal::new("ST2TEST")).unwrap();
            let mut expected = 0u64;
            for sub in subs {
                if let Ok(id) = reg.submit_proof(&ctx(), sub) {
                    prop_assert_eq!(id, ProofId(expected));
                    expected += 1;
                }
            }
            prop_assert_eq!(reg.get_proof_count(), expected);
            prop_assert!(reg.is_consistent());
        }

        /// Once a hash is registered, any further submission with it fails
        /// as a duplicate, whatever the other fields are.
        #[test]
        fn registered_hash_is_always_duplicate(
            hash in "[a-z0-9]{1,64}",
            c in 1i128..1000,
            d in 1i128..1000,
            t in prop_oneof![Just("photo"), Just("report"), Just("video")],
        ) {
            let mut reg = ProofRegistry::new();
            reg.set_authority(Principal::new("ST2TEST")).unwrap();
            reg.submit_proof(&ctx(), ProofSubmission::new(hash.clone(), 1, 1, "photo", "")).unwrap();
            let err = reg.submit_proof(&ctx(), ProofSubmission::new(hash, c, d, t, "other")).unwrap_err();
            let is_duplicate = matches!(err, RegistryError::DuplicateProof { .. });
            prop_assert!(is_duplicate);
        }

        /// A failed call leaves the registry exactly as it was.
        #[test]
        fn failures_do_not_mutate(subs in prop::collection::vec(arb_submission(), 0..30)) {
            let mut reg = ProofRegistry::new();
            reg.set_authority(Principal::new("ST2TEST")).unwrap();
            for sub in subs {
                let before = reg.clone();
                if reg.submit_proof(&ctx(), sub).is_err() {
                    prop_assert_eq!(&reg, &before);
                }
            }
        }
    }
}
