//! Register, enumerate, look up and clear ingest sources.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use reporter_core::{IngestDescriptor, ReporterError};

use crate::state::AppState;

use super::ApiError;

/// GET /ingests
///
/// An empty registry answers 500 rather than `[]`; existing callers rely on it.
pub async fn ingests_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IngestDescriptor>>, ApiError> {
    let ingests = state.registry.list();
    if ingests.is_empty() {
        error!("Error while getting ingest info");
        return Err(ReporterError::EmptyResult.into());
    }
    Ok(Json(ingests))
}

/// GET /ingest/{name}
pub async fn ingests_get(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<IngestDescriptor>, ApiError> {
    state
        .registry
        .get(&name)
        .map(Json)
        .ok_or(ApiError(ReporterError::NotFound))
}

/// POST /ingests
pub async fn ingests_update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IngestDescriptor>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(ingest) =
        payload.map_err(|rejection| ReporterError::Validation(rejection.body_text()))?;
    ingest.validate()?;

    info!("Updating '{}' ingest source", ingest.signal_name);
    state.registry.put(ingest);
    Ok(StatusCode::OK)
}

/// DELETE /ingests
pub async fn ingests_clear(State(state): State<Arc<AppState>>) -> StatusCode {
    let before = state.registry.len();
    state.registry.clear();
    info!(entries = before, "Cleared ingest registry");
    StatusCode::OK
}
