//! Ingest source descriptors.
//!
//! An [`IngestDescriptor`] is keyed by its signal name (`signal` on the wire).
//! Every other field (endpoint, protocol, status, ...) is carried through
//! untouched in [`IngestDescriptor::fields`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ReporterError, Result};

/// The latest known state of one ingest source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestDescriptor {
    /// Unique key of the source.
    #[serde(rename = "signal")]
    pub signal_name: String,

    /// Opaque descriptor fields, stored and returned as received.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl IngestDescriptor {
    pub fn new(signal_name: impl Into<String>) -> Self {
        Self {
            signal_name: signal_name.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style helper to attach one opaque field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Reject descriptors that must never reach the registry.
    pub fn validate(&self) -> Result<()> {
        if self.signal_name.trim().is_empty() {
            return Err(ReporterError::Validation(
                "signal must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}
