//! Health check handlers
//!
//! Banner plus liveness and readiness probes.

use axum::{extract::State, http::StatusCode};
use tracing::warn;

use crate::state::AppState;

/// Body of the root route
pub const ONLINE_MESSAGE: &str = "MDM Votes API ONLINE";

/// GET /
pub async fn root() -> &'static str {
    ONLINE_MESSAGE
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check against the configured stores
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.service_context().health_check().await {
        Ok(()) => (StatusCode::OK, "READY"),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
        }
    }
}
