//! # Verification Authority API
//!
//! Routes:
//! - GET /v1/authority — Current authority, `null` until configured
//! - PUT /v1/authority — Configure the authority (write-once)
//!
//! The registry does not restrict who may configure the authority; the
//! first successful PUT wins. Deployments are expected to call this once
//! at bootstrap.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use impact_core::Principal;

use crate::error::AppError;
use crate::extractors::{extract_json, Caller};
use crate::state::AppState;

/// Request to configure the verification authority.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SetAuthorityRequest {
    pub identity: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorityResponse {
    pub authority: Option<Principal>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/authority", get(get_authority).put(set_authority))
}

/// GET /v1/authority
async fn get_authority(State(state): State<AppState>) -> Json<AuthorityResponse> {
    Json(AuthorityResponse {
        authority: state.registry.authority(),
    })
}

/// PUT /v1/authority
async fn set_authority(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<SetAuthorityRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let req = extract_json(body)?;
    let candidate = req
        .identity
        .parse::<Principal>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match state.registry.set_authority(candidate.clone()) {
        Ok(()) => {
            tracing::info!(authority = %candidate, %caller, "verification authority configured");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) => {
            tracing::warn!(%caller, kind = err.kind(), "authority configuration rejected");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use impact_registry::RegistryConfig;
    use tower::ServiceExt;

    use crate::extractors::CALLER_HEADER;

    fn put(identity: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/v1/authority")
            .header("content-type", "application/json")
            .header(CALLER_HEADER, "ST1TEST")
            .body(Body::from(format!(r#"{{"identity":"{identity}"}}"#)))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn authority_is_null_until_configured() {
        let state = AppState::new(RegistryConfig::default());
        let app = router().with_state(state);

        let req = Request::builder().uri("/v1/authority").body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_json(resp).await["authority"].is_null());

        let resp = app.clone().oneshot(put("ST2TEST")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = Request::builder().uri("/v1/authority").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(body_json(resp).await["authority"], "ST2TEST");
    }

    #[tokio::test]
    async fn second_configuration_conflicts() {
        let app = router().with_state(AppState::new(RegistryConfig::default()));
        let resp = app.clone().oneshot(put("ST2TEST")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app.oneshot(put("ST3TEST")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_CONFIGURED");
        assert_eq!(body["error"]["registry_code"], 110);
    }

    #[tokio::test]
    async fn burn_principal_is_rejected() {
        let app = router().with_state(AppState::new(RegistryConfig::default()));
        let resp = app
            .oneshot(put(impact_core::BURN_PRINCIPAL))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["error"]["code"], "INVALID_AUTHORITY");
    }

    #[tokio::test]
    async fn blank_identity_is_a_validation_error() {
        let app = router().with_state(AppState::new(RegistryConfig::default()));
        let resp = app.oneshot(put("  ")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn missing_caller_is_unauthorized() {
        let state = AppState::new(RegistryConfig::default());
        let app = router().with_state(state.clone());
        let req = Request::builder()
            .method("PUT")
            .uri("/v1/authority")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"identity":"ST2TEST"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(state.registry.authority().is_none());
    }

    #[tokio::test]
    async fn unknown_fields_are_bad_requests() {
        let app = router().with_state(AppState::new(RegistryConfig::default()));
        let req = Request::builder()
            .method("PUT")
            .uri("/v1/authority")
            .header("content-type", "application/json")
            .header(CALLER_HEADER, "ST1TEST")
            .body(Body::from(r#"{"identity":"ST2TEST","role":"admin"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "BAD_REQUEST");
    }
}
