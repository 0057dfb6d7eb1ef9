//! # Custom Extractors
//!
//! [`extract_json`] maps body rejections into the structured error
//! envelope. [`Caller`] turns the `x-caller-principal` header into the request's
//! Identity Source. The registry never authenticates principals; an
//! upstream gateway is expected to set this header after authenticating
//! the client.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::Json;

use impact_core::Principal;

use crate::error::AppError;

/// Unwrap a JSON body, mapping deserialization failures to
/// [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Header carrying the authenticated caller principal.
pub const CALLER_HEADER: &str = "x-caller-principal";

/// The principal making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub Principal);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CALLER_HEADER)
            .ok_or_else(|| AppError::Unauthorized(format!("missing {CALLER_HEADER} header")))?;
        let text = value
            .to_str()
            .map_err(|_| AppError::Unauthorized(format!("{CALLER_HEADER} is not valid text")))?;
        let principal = text
            .parse::<Principal>()
            .map_err(|e| AppError::Unauthorized(e.to_string()))?;
        Ok(Self(principal))
    }
}
