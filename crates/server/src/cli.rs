//! Command-line arguments.
//!
//! Flags override whatever the environment / `.env` configured.

use clap::Parser;

use reporter_core::Config;

/// Ingest reporter: in-memory registry of live ingest sources.
#[derive(Parser, Debug)]
#[command(name = "reporter-server", version, about)]
pub struct Cli {
    /// Interface to bind (overrides REPORTER_HOST).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides REPORTER_PORT).
    #[arg(long, short)]
    pub port: Option<u16>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
