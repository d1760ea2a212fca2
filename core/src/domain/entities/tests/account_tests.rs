use chrono::Utc;
use crate::domain::entities::account::Account;

#[test]
fn test_display_name() {
    let named = Account::new("a@x.com".to_string(), Some("Ada".to_string()), "hash".to_string());
    assert_eq!(named.display_name(), Some("Ada"));

    let blank = Account::new("b@x.com".to_string(), Some("   ".to_string()), "hash".to_string());
    assert_eq!(blank.display_name(), None);

    let unnamed = Account::new("c@x.com".to_string(), None, "hash".to_string());
    assert_eq!(unnamed.display_name(), None);
}

#[test]
fn test_set_password_hash() {
    let mut account = Account::new("a@x.com".to_string(), None, "old".to_string());
    let now = Utc::now();

    account.set_password_hash("new".to_string(), now);

    assert_eq!(account.password_hash, "new");
    assert_eq!(account.updated_at, now);
}

#[test]
fn test_password_hash_not_serialized() {
    let account = Account::new("a@x.com".to_string(), None, "secret-hash".to_string());
    let json = serde_json::to_string(&account).unwrap();

    assert!(json.contains("a@x.com"));
    assert!(!json.contains("secret-hash"));
}
