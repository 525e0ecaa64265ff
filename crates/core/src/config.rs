use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Environment lookup with empty values treated as unset.
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled key: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_opt<F>(lookup: &F, profile: &str, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = lookup(prefixed.as_str()) {
            return Some(v);
        }
    }
    lookup(key)
}

fn profiled_or<F>(lookup: &F, profile: &str, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    profiled_opt(lookup, profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_parse<F, T>(lookup: &F, profile: &str, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    profiled_opt(lookup, profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `REPORTER_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        Self::from_lookup(env_opt)
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("REPORTER_PROFILE").unwrap_or_default().to_uppercase();
        Self {
            server: ServerConfig::from_lookup(&lookup, &profile),
            profile,
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:  listen={}", self.server.listen_addr());
        tracing::info!(
            "  http:    cors_origin={}, max_body_bytes={}",
            self.server.cors_origin,
            self.server.max_body_bytes
        );
    }
}

// ── Server ────────────────────────────────────────────────────

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    fn from_lookup<F>(lookup: &F, p: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: profiled_or(lookup, p, "REPORTER_HOST", "0.0.0.0"),
            port: profiled_parse(lookup, p, "REPORTER_PORT", DEFAULT_PORT),
            cors_origin: profiled_or(lookup, p, "CORS_ORIGIN", "*"),
            max_body_bytes: profiled_parse(lookup, p, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// `host:port` string handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(&|_: &str| None, "")
    }
}
