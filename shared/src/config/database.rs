//! Database configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Backing implementation for the verification store and user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MySQL through SQLx
    #[default]
    MySql,
    /// Process-local maps, for development only
    Memory,
}

impl StorageBackend {
    /// Read `STORAGE_BACKEND`, keeping `default` when unset or unknown
    pub fn from_env_or(default: Self) -> Self {
        std::env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/servicehub"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Overlay environment variables on top of `base`
    pub fn from_env_or(base: Self) -> Self {
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or(base.url),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", base.max_connections),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", base.connect_timeout),
            ..base
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}
