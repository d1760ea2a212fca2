//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the password reset flow
//! depends on:
//! - **Database**: MySQL verification store and user directory using SQLx
//! - **Mail**: SMTP delivery through lettre and a development log notifier
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use sh_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - verification code delivery
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_converts_to_internal() {
        let error: DomainError = InfrastructureError::Config("missing host".to_string()).into();
        match error {
            DomainError::Internal { message } => {
                assert_eq!(message, "Configuration error: missing host");
            }
            other => panic!("Expected internal error, got {:?}", other),
        }
    }
}
