//! # Application State
//!
//! Shared state for the Axum application: the registry behind its single
//! lock, and the clock collaborator.

use std::sync::Arc;

use impact_core::Principal;
use impact_registry::{CallContext, ClockSource, RegistryConfig, SharedRegistry, SystemClock};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub clock: Arc<dyn ClockSource + Send + Sync>,
}

impl AppState {
    /// A fresh registry stamped with wall-clock seconds.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_clock(SharedRegistry::with_config(config), Arc::new(SystemClock::new()))
    }

    pub fn with_clock(registry: SharedRegistry, clock: Arc<dyn ClockSource + Send + Sync>) -> Self {
        Self { registry, clock }
    }

    /// Capture the caller and current time for one registry call.
    pub fn call_context(&self, caller: Principal) -> CallContext {
        CallContext::new(caller, self.clock.current_time())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
