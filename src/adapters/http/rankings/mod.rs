//! Ranking HTTP adapter module.
//!
//! Provides REST API endpoints for ranking forwarders and recording
//! delivery feedback.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{RankingApiError, RankingAppState};
pub use routes::ranking_routes;
