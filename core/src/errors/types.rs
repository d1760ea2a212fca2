//! Error types for the password reset flow
//!
//! Display strings are the user-facing messages; the presentation layer
//! renders them verbatim into the response envelope.

use thiserror::Error;

/// Reset flow rejections surfaced to the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    /// Unknown, mismatched, expired and already-used codes all collapse here
    #[error("Invalid or expired verification code")]
    InvalidOrExpiredCode,

    /// The code was valid but no account exists for the email any more
    #[error("User not found")]
    AccountNotFound,
}

/// Input validation errors
///
/// Each variant names the offending request field so the API layer can
/// build a per-field error map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {field} field is required.")]
    RequiredField { field: String },

    #[error("The email must be a valid email address.")]
    InvalidEmail,

    #[error("The {field} must be at least {min} characters.")]
    TooShort { field: String, min: usize, actual: usize },

    #[error("The {field} confirmation does not match.")]
    ConfirmationMismatch { field: String },
}

impl ValidationError {
    /// Name of the request field the error belongs to
    pub fn field(&self) -> &str {
        match self {
            Self::RequiredField { field }
            | Self::TooShort { field, .. }
            | Self::ConfirmationMismatch { field } => field,
            Self::InvalidEmail => "email",
        }
    }
}
