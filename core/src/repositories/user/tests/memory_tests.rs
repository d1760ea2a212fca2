use crate::domain::entities::account::Account;
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserDirectory, UserDirectory};

#[tokio::test]
async fn test_find_by_email() {
    let account = Account::new("a@x.com".to_string(), Some("Ada".to_string()), "hash".to_string());
    let directory = InMemoryUserDirectory::with_accounts([account.clone()]);

    let found = directory.find_by_email("a@x.com").await.unwrap();
    assert_eq!(found, Some(account));

    assert!(directory.find_by_email("b@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_password_hash() {
    let account = Account::new("a@x.com".to_string(), None, "old".to_string());
    let directory = InMemoryUserDirectory::with_accounts([account.clone()]);

    directory.set_password_hash(&account, "new").await.unwrap();

    assert_eq!(directory.get("a@x.com").await.unwrap().password_hash, "new");
}

#[tokio::test]
async fn test_set_password_hash_for_removed_account() {
    let account = Account::new("a@x.com".to_string(), None, "old".to_string());
    let directory = InMemoryUserDirectory::with_accounts([account.clone()]);
    directory.remove("a@x.com").await;

    let result = directory.set_password_hash(&account, "new").await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
