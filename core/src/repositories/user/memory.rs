//! In-memory implementation of UserDirectory

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::UserDirectory;

/// User directory keyed by email
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.email.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.email.clone(), account);
    }

    pub async fn remove(&self, email: &str) -> Option<Account> {
        self.accounts.write().await.remove(email)
    }

    pub async fn get(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn set_password_hash(&self, account: &Account, password_hash: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.email)
            .ok_or_else(|| DomainError::internal(format!("account {} disappeared during reset", account.id)))?;

        stored.set_password_hash(password_hash.to_string(), Utc::now());
        Ok(())
    }
}
