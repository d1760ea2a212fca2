//! Password reset service module
//!
//! Three-step flow guarded by single-use, time-limited email codes:
//! - Request: issue a code and deliver it in the background
//! - Verify: prove possession of the code
//! - Reset: replace the password hash and consume the code

mod cleanup;
mod config;
mod service;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use cleanup::{VerificationCleanupConfig, VerificationCleanupService};
pub use config::PasswordResetServiceConfig;
pub use service::PasswordResetService;
pub use types::{RequestResetResult, VerifyCodeResult};
pub use validation::{validate_code, validate_email, validate_new_password, MIN_PASSWORD_LENGTH};
