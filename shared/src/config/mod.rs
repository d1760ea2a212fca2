//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outgoing email transport
//! - `reset` - Password reset flow (code lifetime, delivery timeout, policies)
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod mail;
pub mod reset;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailDriver};
pub use reset::{PasswordResetConfig, VerifyStepPolicy};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Which verification store / user directory implementation to use
    #[serde(default)]
    pub storage: StorageBackend,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Password reset flow configuration
    #[serde(default)]
    pub reset: PasswordResetConfig,

    /// Mail transport configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            storage: StorageBackend::default(),
            database: DatabaseConfig::default(),
            reset: PasswordResetConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            storage: StorageBackend::Memory,
            database: DatabaseConfig::new("mysql://localhost:3306/servicehub_dev"),
            reset: PasswordResetConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            storage: StorageBackend::MySql,
            database: DatabaseConfig::new("mysql://prod-db:3306/servicehub")
                .with_max_connections(50),
            reset: PasswordResetConfig::default(),
            mail: MailConfig {
                driver: MailDriver::Smtp,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Starts from the environment preset and lets explicit variables win.
    pub fn from_env() -> Self {
        Self::from_env_or(Self::for_environment(Environment::from_env()))
    }

    /// Preset for the given environment
    pub fn for_environment(env: Environment) -> Self {
        let mut config = match env {
            Environment::Production => Self::production(),
            Environment::Development | Environment::Staging => Self::development(),
        };
        config.environment = env;
        config.logging = LoggingConfig::for_environment(env);
        config
    }

    /// Overlay explicit environment variables on `base`
    pub fn from_env_or(base: Self) -> Self {
        Self {
            environment: base.environment,
            server: ServerConfig::from_env_or(base.server),
            storage: StorageBackend::from_env_or(base.storage),
            database: DatabaseConfig::from_env_or(base.database),
            reset: PasswordResetConfig::from_env_or(base.reset),
            mail: MailConfig::from_env_or(base.mail),
            logging: base.logging,
        }
    }

    /// Check cross-field constraints after all sources are applied
    pub fn validate(&self) -> Result<(), String> {
        self.reset.validate()
    }
}

/// Read an environment variable and parse it, falling back on missing or bad input
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
