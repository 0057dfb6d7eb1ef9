//! # Shared Registry
//!
//! A [`ProofRegistry`] behind one exclusive lock, for hosts that serve
//! calls from several threads or tasks. Each operation holds the lock for
//! its whole duration, so the uniqueness check, identifier allocation and
//! insertion of a submission form a single transaction.
//!
//! Cheaply cloneable via `Arc`; all clones share the same registry.
//! Queries return owned copies so no lock outlives the call.

use std::sync::Arc;

use parking_lot::Mutex;

use impact_core::{Principal, ProofId};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::host::Host;
use crate::proof::{Proof, ProofSubmission, Verification};
use crate::registry::ProofRegistry;

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<ProofRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: ProofRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::new(ProofRegistry::with_config(config))
    }

    pub fn set_authority(&self, candidate: Principal) -> Result<(), RegistryError> {
        self.inner.lock().set_authority(candidate)
    }

    pub fn submit_proof(
        &self,
        host: &impl Host,
        submission: ProofSubmission,
    ) -> Result<ProofId, RegistryError> {
        self.inner.lock().submit_proof(host, submission)
    }

    pub fn verify_proof(
        &self,
        host: &impl Host,
        proof_id: ProofId,
        is_valid: bool,
    ) -> Result<(), RegistryError> {
        self.inner.lock().verify_proof(host, proof_id, is_valid)
    }

    pub fn get_proof(&self, proof_id: ProofId) -> Option<Proof> {
        self.inner.lock().get_proof(proof_id).cloned()
    }

    pub fn get_proof_by_hash(&self, hash: &str) -> Option<Proof> {
        self.inner.lock().get_proof_by_hash(hash).cloned()
    }

    pub fn get_proof_entry_by_hash(&self, hash: &str) -> Option<(ProofId, Proof)> {
        self.inner
            .lock()
            .get_proof_entry_by_hash(hash)
            .map(|(id, proof)| (id, proof.clone()))
    }

    pub fn get_verification(&self, proof_id: ProofId) -> Option<Verification> {
        self.inner.lock().get_verification(proof_id).cloned()
    }

    pub fn get_proof_count(&self) -> u64 {
        self.inner.lock().get_proof_count()
    }

    pub fn is_proof_registered(&self, hash: &str) -> bool {
        self.inner.lock().is_proof_registered(hash)
    }

    pub fn authority(&self) -> Option<Principal> {
        self.inner.lock().authority().cloned()
    }

    pub fn max_proofs(&self) -> u64 {
        self.inner.lock().max_proofs()
    }

    /// A point-in-time copy of the whole registry.
    pub fn snapshot(&self) -> ProofRegistry {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CallContext;
    use impact_core::LedgerTime;

    fn ctx(who: &str) -> CallContext {
        CallContext::new(Principal::new(who), LedgerTime(1))
    }

    #[test]
    fn clones_share_state() {
        let a = SharedRegistry::default();
        let b = a.clone();
        a.set_authority(Principal::new("ST2TEST")).unwrap();
        b.submit_proof(&ctx("ST1TEST"), ProofSubmission::new("abc123", 1, 1, "photo", ""))
            .unwrap();
        assert_eq!(a.get_proof_count(), 1);
        assert!(a.is_proof_registered("abc123"));
        assert_eq!(b.authority(), Some(Principal::new("ST2TEST")));
        let (id, proof) = a.get_proof_entry_by_hash("abc123").unwrap();
        assert_eq!(id, ProofId(0));
        assert_eq!(a.get_proof_by_hash("abc123"), Some(proof));
    }

    #[test]
    fn concurrent_submissions_of_one_hash_admit_exactly_one() {
        let reg = SharedRegistry::default();
        reg.set_authority(Principal::new("ST2TEST")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reg = reg.clone();
                std::thread::spawn(move || {
                    let sub = ProofSubmission::new("contested", i + 1, 1, "photo", "");
                    reg.submit_proof(&ctx(&format!("ST{i}")), sub)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert_eq!(reg.get_proof_count(), 1);
        assert!(reg.snapshot().is_consistent());
    }

    #[test]
    fn concurrent_distinct_submissions_get_distinct_dense_ids() {
        let reg = SharedRegistry::default();
        reg.set_authority(Principal::new("ST2TEST")).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let reg = reg.clone();
                std::thread::spawn(move || {
                    let sub = ProofSubmission::new(format!("hash-{i}"), 1, 1, "report", "");
                    reg.submit_proof(&ctx("ST1TEST"), sub).unwrap()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .map(|h| h.join().unwrap().value())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..16).collect::<Vec<_>>());
    }
}
