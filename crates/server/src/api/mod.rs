//! Ingest registry endpoints.
//!
//! Handlers are stateless: each one decodes its request, makes a single
//! registry call and encodes the result.

mod health;
mod ingests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use reporter_core::ReporterError;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Boundary wrapper so `ReporterError` can be returned from handlers.
pub struct ApiError(pub ReporterError);

impl From<ReporterError> for ApiError {
    fn from(e: ReporterError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ReporterError::Validation(_) => StatusCode::BAD_REQUEST,
            ReporterError::NotFound => StatusCode::NOT_FOUND,
            ReporterError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

// ── Re-exports ───────────────────────────────────────────────────

pub use health::healthcheck;
pub use ingests::{ingests_clear, ingests_get, ingests_list, ingests_update};
