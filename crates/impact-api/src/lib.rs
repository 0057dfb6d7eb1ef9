//! # impact-api — Axum API Service
//!
//! HTTP surface of the impact proof registry, built on Axum/Tower.
//!
//! ## Routes
//!
//! | Method & path | Operation |
//! |---|---|
//! | `GET  /health` | liveness probe |
//! | `GET  /v1/authority` | current authority |
//! | `PUT  /v1/authority` | configure the write-once authority |
//! | `POST /v1/proofs` | submit a proof |
//! | `GET  /v1/proofs/count` | total proofs ever created |
//! | `GET  /v1/proofs/{id}` | proof by identifier |
//! | `POST /v1/proofs/{id}/verify` | record a verdict |
//! | `GET  /v1/proofs/{id}/verification` | latest verdict |
//! | `GET  /v1/proofs/by-hash/{hash}` | proof by content hash |
//! | `GET  /v1/proofs/by-hash/{hash}/registered` | hash membership |
//!
//! ## Caller identity
//!
//! The registry's Identity Source is the `x-caller-principal` request
//! header, read by the [`extractors::Caller`] extractor. The Clock Source
//! is held in [`AppState`]. Each request captures both into one
//! `CallContext` before touching the registry.
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; everything delegates to
//!   `impact-registry`.
//! - All errors map to structured JSON responses via [`AppError`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
pub use error::AppError;
pub use state::AppState;

/// Largest accepted request body. Proof submissions are a few hundred bytes.
const BODY_LIMIT: usize = 64 * 1024;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::authority::router())
        .merge(routes::proofs::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
