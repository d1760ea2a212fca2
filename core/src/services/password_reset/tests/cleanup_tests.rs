use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::repositories::{InMemoryVerificationStore, VerificationStore};
use crate::services::clock::ManualClock;
use crate::services::password_reset::{VerificationCleanupConfig, VerificationCleanupService};

#[tokio::test]
async fn test_run_cleanup_purges_dead_records() {
    let store = Arc::new(InMemoryVerificationStore::new());
    let now = Utc::now();
    store.upsert("live@x.com", "AAAAAA", now + Duration::minutes(10)).await.unwrap();
    store.upsert("stale@x.com", "BBBBBB", now + Duration::minutes(1)).await.unwrap();

    let clock = Arc::new(ManualClock::new(now + Duration::minutes(5)));
    let config = VerificationCleanupConfig { interval_seconds: 60, enabled: true };
    let cleanup = VerificationCleanupService::new(store.clone(), config).with_clock(clock);

    assert_eq!(cleanup.run_cleanup().await.unwrap(), 1);
    assert!(store.get("live@x.com").await.is_some());
    assert!(store.get("stale@x.com").await.is_none());
}

#[tokio::test]
async fn test_disabled_cleanup_is_a_no_op() {
    let store = Arc::new(InMemoryVerificationStore::new());
    store.upsert("stale@x.com", "BBBBBB", Utc::now() - Duration::minutes(1)).await.unwrap();

    let cleanup = Arc::new(VerificationCleanupService::new(
        store.clone(),
        VerificationCleanupConfig::default(),
    ));

    assert_eq!(cleanup.run_cleanup().await.unwrap(), 0);
    assert!(cleanup.start_background_task().is_none());
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let store = Arc::new(InMemoryVerificationStore::new());
    store.upsert("stale@x.com", "BBBBBB", Utc::now() - Duration::minutes(1)).await.unwrap();

    let config = VerificationCleanupConfig { interval_seconds: 30, enabled: true };
    let cleanup = Arc::new(VerificationCleanupService::new(store.clone(), config));

    let handle = cleanup.start_background_task().expect("sweep enabled");
    // First tick fires immediately
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    assert!(store.is_empty().await);
    handle.abort();
}
