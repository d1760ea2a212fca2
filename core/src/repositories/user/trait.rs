//! User directory trait: the slice of account storage the reset flow touches.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find an account by email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered under this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Replace the stored password hash for an existing account
    async fn set_password_hash(&self, account: &Account, password_hash: &str) -> Result<(), DomainError>;
}
