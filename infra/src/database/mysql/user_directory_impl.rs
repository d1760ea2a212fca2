//! MySQL implementation of the UserDirectory trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::account::Account;
use sh_core::errors::DomainError;
use sh_core::repositories::UserDirectory;

/// MySQL implementation of UserDirectory over the `users` table
pub struct MySqlUserDirectory {
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid account UUID: {}", e) })?,
            email: row.try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            name: row.try_get("name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?,
            password_hash: row.try_get("password")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get password: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, name, password, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find user by email: {}", e) })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn set_password_hash(&self, account: &Account, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update password: {}", e) })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Internal {
                message: format!("User {} not found during password update", account.id),
            });
        }

        Ok(())
    }
}
