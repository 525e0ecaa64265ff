pub mod config;
pub mod error;
pub mod ingest;
pub mod registry;

pub use config::Config;
pub use error::*;
pub use ingest::IngestDescriptor;
pub use registry::IngestRegistry;
