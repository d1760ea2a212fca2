//! Verification store trait defining persistence for reset codes.
//!
//! One record per email. Implementations must make `upsert` atomic per email
//! and `mark_verified` a conditional write so that a code is consumed at most
//! once even under concurrent requests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Create or replace the record for `email`
    ///
    /// The stored record carries the new code and expiry with `verified`
    /// reset to false. Any previous code for the email stops matching.
    async fn upsert(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Find the record whose email and code both match exactly
    ///
    /// Returns the record regardless of expiry or verified state; callers
    /// decide validity with [`VerificationStore::is_valid`].
    async fn find(&self, email: &str, code: &str) -> Result<Option<VerificationRecord>, DomainError>;

    /// Flip `verified` to true for this exact record
    ///
    /// # Returns
    /// * `Ok(true)` - The record was unverified and is now consumed
    /// * `Ok(false)` - It was already consumed or replaced by a newer code
    async fn mark_verified(&self, record: &VerificationRecord) -> Result<bool, DomainError>;

    /// Remove consumed records and records that expired before `now`
    ///
    /// Returns the number of rows removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;

    /// A record is valid when present, unverified and not past expiry
    fn is_valid(&self, record: Option<&VerificationRecord>, now: DateTime<Utc>) -> bool {
        record.is_some_and(|record| record.is_valid(now))
    }
}
