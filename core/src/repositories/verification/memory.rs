//! In-memory implementation of VerificationStore
//!
//! Backs the `memory` storage backend and the test suites.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_record::{normalize_code, VerificationRecord};
use crate::errors::DomainError;

use super::trait_::VerificationStore;

/// Verification store keyed by email
#[derive(Clone, Default)]
pub struct InMemoryVerificationStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for an email, whatever its code or state
    pub async fn get(&self, email: &str) -> Option<VerificationRecord> {
        self.records.read().await.get(email).cloned()
    }

    /// Insert a record as-is, bypassing upsert timestamps
    pub async fn insert(&self, record: VerificationRecord) {
        self.records.write().await.insert(record.email.clone(), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn codes_match(stored: &str, supplied: &str) -> bool {
    constant_time_eq(stored.as_bytes(), supplied.as_bytes())
}

#[async_trait]
impl VerificationStore for InMemoryVerificationStore {
    async fn upsert(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let now = Utc::now();
        let mut records = self.records.write().await;

        records
            .entry(email.to_string())
            .and_modify(|record| {
                record.code = normalize_code(code);
                record.expires_at = expires_at;
                record.verified = false;
                record.updated_at = now;
            })
            .or_insert_with(|| VerificationRecord {
                email: email.to_string(),
                code: normalize_code(code),
                expires_at,
                verified: false,
                created_at: now,
                updated_at: now,
            });

        Ok(())
    }

    async fn find(&self, email: &str, code: &str) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(email)
            .filter(|record| codes_match(&record.code, code))
            .cloned())
    }

    async fn mark_verified(&self, record: &VerificationRecord) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.get_mut(&record.email) {
            Some(stored) if !stored.verified && codes_match(&stored.code, &record.code) => {
                stored.mark_verified(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.verified && !record.is_expired(now));
        Ok((before - records.len()) as u64)
    }
}
