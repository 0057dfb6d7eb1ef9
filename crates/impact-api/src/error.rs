//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Registry errors keep their machine-readable kind and numeric ledger
//! code in the response body so callers can surface them verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use impact_registry::RegistryError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "DUPLICATE_PROOF", "NOT_FOUND").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Numeric ledger code, present for registry errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_code: Option<u32>,
}

/// Application-level error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A registry operation was rejected.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request content is semantically invalid (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Caller identity missing or malformed (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

/// HTTP status for a registry error kind.
fn registry_status(err: &RegistryError) -> StatusCode {
    if err.is_input_error() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    match err {
        RegistryError::ProofNotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::CapacityExceeded { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::CONFLICT,
    }
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Registry(err) => (registry_status(err), err.kind()),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let registry_code = match &self {
            Self::Registry(err) => Some(err.code()),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                registry_code,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use impact_core::ProofId;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn registry_error_carries_kind_and_code() {
        let (status, body) = render(AppError::from(RegistryError::DuplicateProof {
            hash: "abc123".into(),
            existing: ProofId(0),
        }))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "DUPLICATE_PROOF");
        assert_eq!(body["error"]["registry_code"], 104);
    }

    #[tokio::test]
    async fn non_registry_error_omits_code() {
        let (status, body) = render(AppError::NotFound("proof:9".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"].get("registry_code").is_none());
    }

    #[test]
    fn status_mapping() {
        for input in [
            RegistryError::InvalidAuthority,
            RegistryError::InvalidHash,
            RegistryError::InvalidCampaign,
            RegistryError::InvalidDonation,
            RegistryError::InvalidProofType("audio".into()),
            RegistryError::InvalidMetadata,
        ] {
            assert_eq!(registry_status(&input), StatusCode::UNPROCESSABLE_ENTITY);
        }
        for conflict in [
            RegistryError::AlreadyConfigured,
            RegistryError::DuplicateProof {
                hash: "abc123".into(),
                existing: ProofId(0),
            },
        ] {
            assert_eq!(registry_status(&conflict), StatusCode::CONFLICT);
        }
        assert_eq!(
            registry_status(&RegistryError::AuthorityNotConfigured),
            StatusCode::CONFLICT
        );
        assert_eq!(
            registry_status(&RegistryError::CapacityExceeded { max_proofs: 1 }),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            registry_status(&RegistryError::ProofNotFound(ProofId(1))),
            StatusCode::NOT_FOUND
        );
    }
}
