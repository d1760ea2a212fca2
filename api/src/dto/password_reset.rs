//! Request bodies for the password reset endpoints
//!
//! Every field defaults to empty so a missing key is reported as a
//! validation error rather than a deserialization failure.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use sh_core::errors::ValidationError as DomainValidationError;
use sh_core::services::password_reset::{validate_code, validate_email, MIN_PASSWORD_LENGTH};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    #[validate(custom(function = "email_field"))]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyResetCodeRequest {
    #[serde(default)]
    #[validate(custom(function = "email_field"))]
    pub email: String,

    /// The 6-character code from the email; case-insensitive
    #[serde(default)]
    #[validate(custom(function = "code_field"))]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(custom(function = "email_field"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "code_field"))]
    pub code: String,

    #[serde(default)]
    #[validate(
        custom(function = "password_field"),
        must_match(
            other = "password_confirmation",
            message = "The password confirmation does not match."
        )
    )]
    pub password: String,

    #[serde(default)]
    pub password_confirmation: String,
}

fn email_field(email: &str) -> Result<(), ValidationError> {
    validate_email(email).map(|_| ()).map_err(field_error)
}

fn code_field(code: &str) -> Result<(), ValidationError> {
    validate_code(code).map(|_| ()).map_err(field_error)
}

fn password_field(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error(DomainValidationError::RequiredField {
            field: "password".to_string(),
        }));
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(field_error(DomainValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        }));
    }

    Ok(())
}

/// Carry the domain message over to validator's error type
fn field_error(error: DomainValidationError) -> ValidationError {
    let code = match &error {
        DomainValidationError::RequiredField { .. } => "required",
        DomainValidationError::InvalidEmail => "email",
        DomainValidationError::TooShort { .. } => "min",
        DomainValidationError::ConfirmationMismatch { .. } => "confirmed",
    };

    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(error.to_string().into());
    validation_error
}
