//! Password reset flow configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Default lifetime of a reset code
pub const DEFAULT_CODE_EXPIRATION_MINUTES: i64 = 10;

/// Longest accepted code lifetime (one day)
pub const MAX_CODE_EXPIRATION_MINUTES: i64 = 24 * 60;

/// Default upper bound for a single notification attempt
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;

/// Whether the verify step consumes the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStepPolicy {
    /// A successful verify marks the record verified; a later reset with the
    /// same code is rejected
    #[default]
    Consume,
    /// Verify only reports validity; reset is the sole consumer
    PreCheck,
}

impl std::str::FromStr for VerifyStepPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "consume" => Ok(VerifyStepPolicy::Consume),
            "pre_check" | "precheck" => Ok(VerifyStepPolicy::PreCheck),
            _ => Err(format!("Invalid verify step policy: {}", s)),
        }
    }
}

/// Configuration for the password reset flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordResetConfig {
    /// Minutes a freshly issued code stays valid
    pub code_expiration_minutes: i64,

    /// Seconds a notification attempt may take before it is abandoned
    pub notification_timeout_secs: u64,

    /// Verify step consumption policy
    #[serde(default)]
    pub verify_policy: VerifyStepPolicy,

    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,

    /// Seconds between cleanup sweeps of dead records (0 disables the sweep)
    #[serde(default)]
    pub cleanup_interval_secs: u64,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_CODE_EXPIRATION_MINUTES,
            notification_timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT_SECS,
            verify_policy: VerifyStepPolicy::Consume,
            bcrypt_cost: 10,
            cleanup_interval_secs: 0,
        }
    }
}

impl PasswordResetConfig {
    /// Create from `RESET_*` environment variables
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Overlay `RESET_*` environment variables on `base`
    pub fn from_env_or(base: Self) -> Self {
        Self {
            code_expiration_minutes: env_or(
                "RESET_CODE_EXPIRATION_MINUTES",
                base.code_expiration_minutes,
            ),
            notification_timeout_secs: env_or(
                "RESET_NOTIFICATION_TIMEOUT_SECS",
                base.notification_timeout_secs,
            ),
            verify_policy: env_or("RESET_VERIFY_POLICY", base.verify_policy),
            bcrypt_cost: env_or("RESET_BCRYPT_COST", base.bcrypt_cost),
            cleanup_interval_secs: env_or(
                "RESET_CLEANUP_INTERVAL_SECS",
                base.cleanup_interval_secs,
            ),
        }
    }

    /// Reject settings the reset flow cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_CODE_EXPIRATION_MINUTES).contains(&self.code_expiration_minutes) {
            return Err(format!(
                "reset.code_expiration_minutes must be between 1 and {}, got {}",
                MAX_CODE_EXPIRATION_MINUTES, self.code_expiration_minutes
            ));
        }
        Ok(())
    }

    /// Whether the periodic cleanup sweep should run
    pub fn cleanup_enabled(&self) -> bool {
        self.cleanup_interval_secs > 0
    }
}
