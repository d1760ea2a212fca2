//! Tests for the in-memory verification store

use chrono::{Duration, Utc};

use crate::repositories::verification::{InMemoryVerificationStore, VerificationStore};

#[tokio::test]
async fn test_upsert_creates_record() {
    let store = InMemoryVerificationStore::new();
    let expires_at = Utc::now() + Duration::minutes(10);

    store.upsert("a@x.com", "AB12CD", expires_at).await.unwrap();

    let record = store.get("a@x.com").await.unwrap();
    assert_eq!(record.code, "AB12CD");
    assert_eq!(record.expires_at, expires_at);
    assert!(!record.verified);
}

#[tokio::test]
async fn test_upsert_replaces_previous_code() {
    let store = InMemoryVerificationStore::new();
    let expires_at = Utc::now() + Duration::minutes(10);

    store.upsert("a@x.com", "AAAAAA", expires_at).await.unwrap();
    let first = store.find("a@x.com", "AAAAAA").await.unwrap().unwrap();
    store.mark_verified(&first).await.unwrap();

    store.upsert("a@x.com", "BBBBBB", expires_at).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert!(store.find("a@x.com", "AAAAAA").await.unwrap().is_none());

    let second = store.find("a@x.com", "BBBBBB").await.unwrap().unwrap();
    assert!(!second.verified);
    assert_eq!(second.created_at, first.created_at);
}

#[tokio::test]
async fn test_find_requires_exact_match() {
    let store = InMemoryVerificationStore::new();
    store.upsert("a@x.com", "AB12CD", Utc::now() + Duration::minutes(10)).await.unwrap();

    assert!(store.find("a@x.com", "AB12CD").await.unwrap().is_some());
    assert!(store.find("a@x.com", "AB12CE").await.unwrap().is_none());
    assert!(store.find("b@x.com", "AB12CD").await.unwrap().is_none());
    assert!(store.find("a@x.com", "").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mark_verified_is_single_use() {
    let store = InMemoryVerificationStore::new();
    store.upsert("a@x.com", "AB12CD", Utc::now() + Duration::minutes(10)).await.unwrap();
    let record = store.find("a@x.com", "AB12CD").await.unwrap().unwrap();

    assert!(store.mark_verified(&record).await.unwrap());
    assert!(!store.mark_verified(&record).await.unwrap());
    assert!(store.get("a@x.com").await.unwrap().verified);
}

#[tokio::test]
async fn test_mark_verified_ignores_replaced_record() {
    let store = InMemoryVerificationStore::new();
    let expires_at = Utc::now() + Duration::minutes(10);
    store.upsert("a@x.com", "AAAAAA", expires_at).await.unwrap();
    let stale = store.find("a@x.com", "AAAAAA").await.unwrap().unwrap();

    store.upsert("a@x.com", "BBBBBB", expires_at).await.unwrap();

    assert!(!store.mark_verified(&stale).await.unwrap());
    assert!(!store.get("a@x.com").await.unwrap().verified);
}

#[tokio::test]
async fn test_is_valid() {
    let store = InMemoryVerificationStore::new();
    let now = Utc::now();
    store.upsert("a@x.com", "AB12CD", now + Duration::minutes(10)).await.unwrap();
    let record = store.find("a@x.com", "AB12CD").await.unwrap();

    assert!(store.is_valid(record.as_ref(), now));
    assert!(store.is_valid(record.as_ref(), now + Duration::minutes(10)));
    assert!(!store.is_valid(record.as_ref(), now + Duration::minutes(11)));
    assert!(!store.is_valid(None, now));
}

#[tokio::test]
async fn test_purge_expired() {
    let store = InMemoryVerificationStore::new();
    let now = Utc::now();

    store.upsert("live@x.com", "AAAAAA", now + Duration::minutes(10)).await.unwrap();
    store.upsert("stale@x.com", "BBBBBB", now - Duration::minutes(1)).await.unwrap();
    store.upsert("used@x.com", "CCCCCC", now + Duration::minutes(10)).await.unwrap();
    let used = store.find("used@x.com", "CCCCCC").await.unwrap().unwrap();
    store.mark_verified(&used).await.unwrap();

    let removed = store.purge_expired(now).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.len().await, 1);
    assert!(store.get("live@x.com").await.is_some());
}
