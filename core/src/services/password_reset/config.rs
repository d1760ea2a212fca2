//! Configuration for the password reset service

use std::time::Duration;

use sh_shared::config::{PasswordResetConfig, VerifyStepPolicy};

use crate::domain::entities::verification_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetServiceConfig {
    /// Number of minutes before a reset code expires
    pub code_expiration_minutes: i64,
    /// Upper bound for a single background delivery attempt
    pub notification_timeout: Duration,
    /// Whether the verify step consumes the code
    pub verify_policy: VerifyStepPolicy,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for PasswordResetServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            notification_timeout: Duration::from_secs(10),
            verify_policy: VerifyStepPolicy::Consume,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&PasswordResetConfig> for PasswordResetServiceConfig {
    fn from(config: &PasswordResetConfig) -> Self {
        Self {
            code_expiration_minutes: config.code_expiration_minutes,
            notification_timeout: Duration::from_secs(config.notification_timeout_secs),
            verify_policy: config.verify_policy,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
