//! Server configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Browser origins allowed by CORS outside development
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Proxies whose `X-Forwarded-Proto` header is trusted
    #[serde(default)]
    pub trusted_proxies: Vec<String>,

    /// Preflight cache lifetime in seconds
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
            allowed_origins: Vec::new(),
            trusted_proxies: Vec::new(),
            cors_max_age: default_cors_max_age(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Overlay `SERVER_*`, `ALLOWED_ORIGINS`, `TRUSTED_PROXIES` and
    /// `CORS_MAX_AGE` on `base`
    pub fn from_env_or(base: Self) -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(base.host),
            port: env_or("SERVER_PORT", base.port),
            workers: env_or("SERVER_WORKERS", base.workers),
            max_payload_size: base.max_payload_size,
            allowed_origins: list_or("ALLOWED_ORIGINS", base.allowed_origins),
            trusted_proxies: list_or("TRUSTED_PROXIES", base.trusted_proxies),
            cors_max_age: env_or("CORS_MAX_AGE", base.cors_max_age),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024
}

fn default_cors_max_age() -> usize {
    3600
}

/// Comma-separated list from `key`, or `default` when unset
fn list_or(key: &str, default: Vec<String>) -> Vec<String> {
    match std::env::var(key) {
        Ok(value) => parse_list(&value),
        Err(_) => default,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
