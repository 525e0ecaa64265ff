//! Liveness endpoint.

/// GET /healthcheck
pub async fn healthcheck() -> &'static str {
    "WORKING"
}
