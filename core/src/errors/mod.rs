//! Domain-specific error types and error handling.

mod types;

pub use types::{ResetError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Reset(#[from] ResetError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_error_messages() {
        let err: DomainError = ResetError::InvalidOrExpiredCode.into();
        assert_eq!(err.to_string(), "Invalid or expired verification code");

        let err: DomainError = ResetError::AccountNotFound.into();
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::TooShort { field: "password".to_string(), min: 8, actual: 3 };
        assert_eq!(err.field(), "password");
        assert_eq!(err.to_string(), "The password must be at least 8 characters.");

        assert_eq!(ValidationError::InvalidEmail.field(), "email");

        let err = ValidationError::RequiredField { field: "code".to_string() };
        assert_eq!(err.to_string(), "The code field is required.");
    }

    #[test]
    fn test_internal_constructor() {
        let err = DomainError::internal("pool closed");
        assert!(matches!(err, DomainError::Internal { ref message } if message == "pool closed"));
    }
}
