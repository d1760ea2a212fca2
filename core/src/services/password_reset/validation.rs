//! Input validation for the reset flow

use sh_shared::utils::email::{is_valid_email, normalize_email};

use crate::domain::entities::verification_record::normalize_code;
use crate::errors::ValidationError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Returns the normalized email or the first problem found
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(ValidationError::RequiredField { field: "email".to_string() });
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Returns the code trimmed and uppercased
///
/// Only presence is checked. A code of the wrong shape simply never
/// matches, which keeps rejections uniform.
pub fn validate_code(code: &str) -> Result<String, ValidationError> {
    let code = normalize_code(code);
    if code.is_empty() {
        return Err(ValidationError::RequiredField { field: "code".to_string() });
    }
    Ok(code)
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField { field: "password".to_string() });
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }

    if password != confirmation {
        return Err(ValidationError::ConfirmationMismatch { field: "password".to_string() });
    }

    Ok(())
}
