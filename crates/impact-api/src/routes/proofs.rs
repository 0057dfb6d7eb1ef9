//! # Proof Registry API
//!
//! Routes:
//! - POST /v1/proofs — Submit a proof
//! - GET  /v1/proofs/count — Proofs ever created, and capacity
//! - GET  /v1/proofs/{id} — Proof by identifier
//! - POST /v1/proofs/{id}/verify — Record a verdict
//! - GET  /v1/proofs/{id}/verification — Latest verdict
//! - GET  /v1/proofs/by-hash/{hash} — Proof by content hash
//! - GET  /v1/proofs/by-hash/{hash}/registered — Hash membership
//!
//! Handlers hold no rules of their own. Submission fields are forwarded
//! raw so the registry's validation order decides which error is reported.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use impact_core::ProofId;
use impact_registry::{Proof, ProofSubmission, Verification};

use crate::error::AppError;
use crate::extractors::{extract_json, Caller};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request to register a proof of impact.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitProofRequest {
    /// Content hash of the off-ledger evidence, 1 to 64 characters.
    pub hash: String,
    /// Any integer; only 1..=u64::MAX is accepted by the registry.
    pub campaign_id: i128,
    pub donation_id: i128,
    /// One of "photo", "report", "video". Case-sensitive.
    pub proof_type: String,
    #[serde(default)]
    pub metadata: String,
}

impl From<SubmitProofRequest> for ProofSubmission {
    fn from(req: SubmitProofRequest) -> Self {
        ProofSubmission::new(
            req.hash,
            req.campaign_id,
            req.donation_id,
            req.proof_type,
            req.metadata,
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SubmitProofResponse {
    pub proof_id: ProofId,
}

/// Request to record a verdict on a proof.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyProofRequest {
    pub is_valid: bool,
}

/// A proof together with its identifier.
#[derive(Debug, Serialize)]
pub struct ProofResponse {
    pub proof_id: ProofId,
    #[serde(flatten)]
    pub proof: Proof,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProofCountResponse {
    pub count: u64,
    pub max_proofs: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RegisteredResponse {
    pub registered: bool,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/proofs", post(submit_proof))
        .route("/v1/proofs/count", get(proof_count))
        .route("/v1/proofs/{id}", get(get_proof))
        .route("/v1/proofs/{id}/verify", post(verify_proof))
        .route("/v1/proofs/{id}/verification", get(get_verification))
        .route("/v1/proofs/by-hash/{hash}", get(get_proof_by_hash))
        .route("/v1/proofs/by-hash/{hash}/registered", get(is_registered))
}

fn proof_id(path: Result<Path<u64>, PathRejection>) -> Result<ProofId, AppError> {
    path.map(|Path(id)| ProofId(id))
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/proofs
async fn submit_proof(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<SubmitProofRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitProofResponse>), AppError> {
    let req = extract_json(body)?;
    let ctx = state.call_context(caller.clone());

    match state.registry.submit_proof(&ctx, req.into()) {
        Ok(proof_id) => {
            tracing::info!(%proof_id, %caller, timestamp = ctx.now.value(), "proof registered");
            Ok((StatusCode::CREATED, Json(SubmitProofResponse { proof_id })))
        }
        Err(err) => {
            tracing::warn!(%caller, kind = err.kind(), "proof submission rejected");
            Err(err.into())
        }
    }
}

/// GET /v1/proofs/count
async fn proof_count(State(state): State<AppState>) -> Json<ProofCountResponse> {
    Json(ProofCountResponse {
        count: state.registry.get_proof_count(),
        max_proofs: state.registry.max_proofs(),
    })
}

/// GET /v1/proofs/{id}
async fn get_proof(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<ProofResponse>, AppError> {
    let proof_id = proof_id(path)?;
    let proof = state
        .registry
        .get_proof(proof_id)
        .ok_or_else(|| AppError::NotFound(proof_id.to_string()))?;
    Ok(Json(ProofResponse { proof_id, proof }))
}

/// POST /v1/proofs/{id}/verify
///
/// Any identified caller may record a verdict once an authority exists.
async fn verify_proof(
    State(state): State<AppState>,
    Caller(caller): Caller,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<VerifyProofRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let proof_id = proof_id(path)?;
    let req = extract_json(body)?;
    let ctx = state.call_context(caller.clone());

    match state.registry.verify_proof(&ctx, proof_id, req.is_valid) {
        Ok(()) => {
            tracing::info!(%proof_id, verifier = %caller, is_valid = req.is_valid, "verification recorded");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) => {
            tracing::warn!(%proof_id, %caller, kind = err.kind(), "verification rejected");
            Err(err.into())
        }
    }
}

/// GET /v1/proofs/{id}/verification
async fn get_verification(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Verification>, AppError> {
    let proof_id = proof_id(path)?;
    state
        .registry
        .get_verification(proof_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("verification for {proof_id}")))
}

/// GET /v1/proofs/by-hash/{hash}
async fn get_proof_by_hash(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<ProofResponse>, AppError> {
    let (proof_id, proof) = state
        .registry
        .get_proof_entry_by_hash(&hash)
        .ok_or_else(|| AppError::NotFound(format!("proof with hash {hash}")))?;
    Ok(Json(ProofResponse { proof_id, proof }))
}

/// GET /v1/proofs/by-hash/{hash}/registered
async fn is_registered(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Json<RegisteredResponse> {
    Json(RegisteredResponse {
        registered: state.registry.is_proof_registered(&hash),
    })
}
