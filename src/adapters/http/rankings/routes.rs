//! HTTP routes for the ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, rank_forwarders, record_feedback, RankingAppState};

/// Creates the ranking router with all routes.
pub fn ranking_routes(state: RankingAppState) -> Router {
    Router::new()
        // POST /rankings
        .route("/rankings", post(rank_forwarders))
        // POST /feedback
        .route("/feedback", post(record_feedback))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
