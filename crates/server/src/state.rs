use std::sync::Arc;

use reporter_core::IngestRegistry;

/// Shared handler state. The registry is built once at startup and never
/// replaced for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<IngestRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<IngestRegistry>) -> Self {
        Self { registry }
    }
}
