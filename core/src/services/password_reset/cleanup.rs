//! Periodic sweep of dead verification records
//!
//! The reset flow never deletes records, so without a sweep the store keeps
//! one row per email that ever requested a reset. Consumed and expired rows
//! are safe to drop: neither can authorize anything again.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use sh_shared::config::PasswordResetConfig;

use crate::errors::DomainError;
use crate::repositories::VerificationStore;
use crate::services::clock::{Clock, SystemClock};

/// Configuration for the verification cleanup service
#[derive(Debug, Clone, Default)]
pub struct VerificationCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl From<&PasswordResetConfig> for VerificationCleanupConfig {
    fn from(config: &PasswordResetConfig) -> Self {
        Self {
            interval_seconds: config.cleanup_interval_secs,
            enabled: config.cleanup_enabled(),
        }
    }
}

/// Service for purging consumed and expired verification records
pub struct VerificationCleanupService<S: VerificationStore + 'static> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    config: VerificationCleanupConfig,
}

impl<S: VerificationStore> VerificationCleanupService<S> {
    pub fn new(store: Arc<S>, config: VerificationCleanupConfig) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run a single cleanup cycle, returning the number of records removed
    pub async fn run_cleanup(&self) -> Result<u64, DomainError> {
        if !self.config.enabled {
            return Ok(0);
        }

        let removed = self.store.purge_expired(self.clock.now()).await?;
        info!(
            removed,
            event = "verification_cleanup_completed",
            "Purged dead verification records"
        );
        Ok(removed)
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when the sweep is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled || self.config.interval_seconds == 0 {
            warn!("Verification cleanup service is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "Verification cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Verification cleanup cycle failed: {}", e);
                }
            }
        }))
    }
}
