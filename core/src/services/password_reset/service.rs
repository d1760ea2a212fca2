//! Main password reset service implementation

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use sh_shared::config::VerifyStepPolicy;
use sh_shared::utils::email::mask_email;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainError, DomainResult, ResetError};
use crate::repositories::{UserDirectory, VerificationStore};
use crate::services::clock::{Clock, SystemClock};
use crate::services::code_generator::{CodeGenerator, SecureCodeGenerator};
use crate::services::notification::{dispatch, Notifier, VerificationNotice};

use super::config::PasswordResetServiceConfig;
use super::types::{RequestResetResult, VerifyCodeResult};
use super::validation::{validate_code, validate_email, validate_new_password};

/// Password reset service driving the request, verify and reset steps
pub struct PasswordResetService<U: UserDirectory, S: VerificationStore> {
    /// Account lookup and password hash updates
    user_directory: Arc<U>,
    /// Verification record persistence
    verification_store: Arc<S>,
    /// Out-of-band code delivery
    notifier: Arc<dyn Notifier>,
    code_generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    config: PasswordResetServiceConfig,
}

impl<U: UserDirectory, S: VerificationStore> PasswordResetService<U, S> {
    /// Create a new password reset service using the system clock and
    /// the OS-entropy code generator
    pub fn new(
        user_directory: Arc<U>,
        verification_store: Arc<S>,
        notifier: Arc<dyn Notifier>,
        config: PasswordResetServiceConfig,
    ) -> Self {
        Self {
            user_directory,
            verification_store,
            notifier,
            code_generator: Arc::new(SecureCodeGenerator),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    pub fn config(&self) -> &PasswordResetServiceConfig {
        &self.config
    }

    /// Issue a fresh code for `email`
    ///
    /// This method:
    /// 1. Validates the email format
    /// 2. Stores a new code, replacing any earlier one, whether or not an account exists
    /// 3. Looks up the account and, when found, schedules delivery in the background
    ///
    /// The result is shaped identically for known and unknown emails.
    /// Directory failures are logged and treated as "no account".
    pub async fn request_reset(&self, email: &str) -> DomainResult<RequestResetResult> {
        let email = validate_email(email)?;
        let masked = mask_email(&email);

        let code = self.code_generator.generate();
        let expires_at = Duration::try_minutes(self.config.code_expiration_minutes)
            .and_then(|lifetime| self.clock.now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "Code expiration of {} minutes is out of range",
                    self.config.code_expiration_minutes
                ))
            })?;

        self.verification_store
            .upsert(&email, &code, expires_at)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "reset_code_storage_failed",
                    "Failed to store password reset code"
                );
            })?;

        tracing::info!(
            email = %masked,
            expires_at = %expires_at,
            event = "reset_code_issued",
            "Issued password reset code"
        );

        let account = match self.user_directory.find_by_email(&email).await {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(
                    email = %masked,
                    error = %e,
                    event = "reset_account_lookup_failed",
                    "Account lookup failed, skipping code delivery"
                );
                None
            }
        };

        let notification = match account {
            Some(account) => {
                let notice = VerificationNotice {
                    email,
                    code,
                    display_name: account.display_name().map(str::to_string),
                };
                Some(dispatch(
                    Arc::clone(&self.notifier),
                    notice,
                    self.config.notification_timeout,
                ))
            }
            None => {
                tracing::debug!(
                    email = %masked,
                    event = "reset_requested_unknown_account",
                    "No account for reset request, code not delivered"
                );
                None
            }
        };

        Ok(RequestResetResult {
            expires_at,
            notification,
        })
    }

    /// Check a code presented by the user
    ///
    /// Unknown, mismatched, expired and already-used codes are all rejected
    /// with [`ResetError::InvalidOrExpiredCode`]. Under
    /// [`VerifyStepPolicy::Consume`] a successful check consumes the code.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let email = validate_email(email)?;
        let code = validate_code(code)?;

        let record = self.find_valid_record(&email, &code).await?;

        let consumed = match self.config.verify_policy {
            VerifyStepPolicy::Consume => {
                self.consume(&record).await?;
                true
            }
            VerifyStepPolicy::PreCheck => false,
        };

        tracing::info!(
            email = %mask_email(&email),
            consumed,
            event = "reset_code_verified",
            "Password reset code verified"
        );

        Ok(VerifyCodeResult {
            expires_at: record.expires_at,
            consumed,
        })
    }

    /// Replace the account password using a valid code
    ///
    /// This method:
    /// 1. Validates the new password and its confirmation
    /// 2. Requires a valid, unconsumed code for the email
    /// 3. Requires the account to still exist
    /// 4. Consumes the code, so a concurrent reset with the same code fails
    /// 5. Stores the bcrypt hash of the new password
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        password: &str,
        password_confirmation: &str,
    ) -> DomainResult<()> {
        let email = validate_email(email)?;
        let code = validate_code(code)?;
        validate_new_password(password, password_confirmation)?;
        let masked = mask_email(&email);

        let record = self.find_valid_record(&email, &code).await?;

        let account = self
            .user_directory
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    email = %masked,
                    event = "reset_account_not_found",
                    "Valid reset code presented for a missing account"
                );
                ResetError::AccountNotFound
            })?;

        let password_hash = self.hash_password(password).await?;

        self.consume(&record).await?;

        self.user_directory
            .set_password_hash(&account, &password_hash)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "password_update_failed",
                    "Failed to store new password hash"
                );
            })?;

        tracing::info!(
            email = %masked,
            account_id = %account.id,
            event = "password_reset_completed",
            "Password reset completed"
        );

        Ok(())
    }

    /// Look up the record and apply the validity rule at the current time
    async fn find_valid_record(&self, email: &str, code: &str) -> DomainResult<VerificationRecord> {
        let now = self.clock.now();
        let record = self.verification_store.find(email, code).await?;

        if !self.verification_store.is_valid(record.as_ref(), now) {
            tracing::warn!(
                email = %mask_email(email),
                reason = rejection_reason(record.as_ref(), now),
                event = "reset_code_rejected",
                "Rejected password reset code"
            );
            return Err(ResetError::InvalidOrExpiredCode.into());
        }

        record.ok_or_else(|| ResetError::InvalidOrExpiredCode.into())
    }

    /// Mark the record consumed, treating a lost race as an invalid code
    async fn consume(&self, record: &VerificationRecord) -> DomainResult<()> {
        if self.verification_store.mark_verified(record).await? {
            Ok(())
        } else {
            tracing::warn!(
                email = %mask_email(&record.email),
                event = "reset_code_consumed_concurrently",
                "Reset code was consumed by a concurrent request"
            );
            Err(ResetError::InvalidOrExpiredCode.into())
        }
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }
}

// Internal log detail only; callers always see the uniform rejection
fn rejection_reason(record: Option<&VerificationRecord>, now: DateTime<Utc>) -> &'static str {
    match record {
        None => "no_match",
        Some(record) if record.verified => "already_used",
        Some(record) if record.is_expired(now) => "expired",
        Some(_) => "unknown",
    }
}
