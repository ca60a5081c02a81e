//! HTTP adapters - REST API implementations.
//!
//! `build_router` wraps the ranking routes with request tracing, a request
//! timeout and CORS, all driven by `ServerConfig`.

pub mod rankings;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use rankings::{ranking_routes, RankingAppState};

/// Builds the full HTTP application.
pub fn build_router(state: RankingAppState, server: &ServerConfig) -> Router {
    ranking_routes(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins; origins that are not valid header values are skipped.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
