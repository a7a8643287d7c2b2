//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{daily, health, ranking, votes};
use crate::state::AppState;

/// Create the router with every route
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(vote_routes())
        .merge(health_routes())
}

/// Vote, ranking, and daily routes
fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/vote", get(votes::cast_vote))
        .route("/rank", get(ranking::get_rank))
        .route("/top", get(ranking::get_top))
        .route("/fastest", get(daily::get_fastest))
}

/// Banner and health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
