use thiserror::Error;

/// Failures surfaced at the request boundary.
///
/// The registry itself cannot fail; every variant here describes either bad
/// caller input or a lookup/enumeration that came back empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReporterError {
    #[error("{0}")]
    Validation(String),

    #[error("Active ingests servers not found")]
    NotFound,

    #[error("No ingest info available in cache")]
    EmptyResult,
}

impl ReporterError {
    /// Map to an HTTP status code for API responses.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound => 404,
            Self::EmptyResult => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReporterError>;
