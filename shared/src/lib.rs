//! Shared utilities and common types for the ServiceHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelopes
//! - Utility functions (email validation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig, MailDriver,
    PasswordResetConfig, ServerConfig, StorageBackend, VerifyStepPolicy,
};
pub use types::{ApiResponse, HealthResponse};
pub use utils::email;
