//! MySQL implementation of the VerificationStore trait.
//!
//! Rows live in `password_resets`, one per email (unique key). Replacement
//! relies on `INSERT ... ON DUPLICATE KEY UPDATE`; consumption is a
//! conditional update so only one caller can flip `verified`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sh_core::domain::entities::verification_record::{normalize_code, VerificationRecord};
use sh_core::errors::DomainError;
use sh_core::repositories::VerificationStore;

/// MySQL implementation of VerificationStore
pub struct MySqlVerificationStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        Ok(VerificationRecord {
            email: row.try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            code: row.try_get("code")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get code: {}", e) })?,
            expires_at: row.try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get expires_at: {}", e) })?,
            verified: row.try_get("verified")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get verified: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl VerificationStore for MySqlVerificationStore {
    async fn upsert(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO password_resets (email, code, expires_at, verified, created_at, updated_at)
            VALUES (?, ?, ?, FALSE, ?, ?)
            ON DUPLICATE KEY UPDATE
                code = VALUES(code),
                expires_at = VALUES(expires_at),
                verified = FALSE,
                updated_at = VALUES(updated_at)
        "#;

        let now = Utc::now();
        sqlx::query(query)
            .bind(email)
            .bind(normalize_code(code))
            .bind(expires_at)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to store reset code: {}", e) })?;

        Ok(())
    }

    async fn find(&self, email: &str, code: &str) -> Result<Option<VerificationRecord>, DomainError> {
        let query = r#"
            SELECT email, code, expires_at, verified, created_at, updated_at
            FROM password_resets
            WHERE email = ? AND code = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find reset code: {}", e) })?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn mark_verified(&self, record: &VerificationRecord) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE password_resets
            SET verified = TRUE, updated_at = ?
            WHERE email = ? AND code = ? AND verified = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(&record.email)
            .bind(&record.code)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to mark reset code verified: {}", e) })?;

        Ok(result.rows_affected() == 1)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM password_resets WHERE verified = TRUE OR expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to purge reset codes: {}", e) })?;

        Ok(result.rows_affected())
    }
}
