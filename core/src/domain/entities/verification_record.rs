//! Verification record entity for email-based password reset.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = sh_shared::config::reset::DEFAULT_CODE_EXPIRATION_MINUTES;

/// Pending reset authorization for one email address
///
/// At most one record exists per email. Issuing a new code replaces the
/// previous one, so only the latest code can ever match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Email address the code was issued for (natural key)
    pub email: String,

    /// The 6-character uppercase alphanumeric code
    pub code: String,

    /// Timestamp after which the code is rejected
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been consumed
    pub verified: bool,

    /// Timestamp when the record was first created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last upsert or verification
    pub updated_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a fresh, unverified record expiring `expiration_minutes` after `now`
    pub fn new(email: String, code: &str, now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self {
            email,
            code: normalize_code(code),
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// A record is expired once the clock has moved strictly past `expires_at`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks if the code can still authorize a reset
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        !self.verified && !self.is_expired(now)
    }

    /// Marks the code as consumed
    pub fn mark_verified(&mut self, now: DateTime<Utc>) {
        self.verified = true;
        self.updated_at = now;
    }

    /// Remaining lifetime, zero once expired
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.is_expired(now) {
            Duration::zero()
        } else {
            self.expires_at - now
        }
    }
}

/// Canonical form of a user-supplied code: trimmed, ASCII uppercase
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
