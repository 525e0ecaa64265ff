//! HTTP router construction.
//!
//! Assembles the routes and middleware into a single `Router`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use reporter_core::config::ServerConfig;

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthcheck", get(api::healthcheck))
        .route(
            "/ingests",
            get(api::ingests_list)
                .post(api::ingests_update)
                .delete(api::ingests_clear),
        )
        .route("/ingest/{name}", get(api::ingests_get))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::permissive().allow_origin(value),
        Err(e) => {
            warn!("Invalid CORS_ORIGIN '{}': {}, falling back to permissive", origin, e);
            CorsLayer::permissive()
        }
    }
}
