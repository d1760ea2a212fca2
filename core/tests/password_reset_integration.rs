//! End-to-end reset flow through the public API with the real code generator

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    use sh_core::domain::entities::Account;
    use sh_core::errors::{DomainError, ResetError};
    use sh_core::repositories::{InMemoryUserDirectory, InMemoryVerificationStore, VerificationStore};
    use sh_core::services::clock::{Clock, ManualClock};
    use sh_core::services::notification::Notifier;
    use sh_core::services::password_reset::{
        PasswordResetService, PasswordResetServiceConfig, VerificationCleanupConfig,
        VerificationCleanupService,
    };

    // Mock mailer keeping the last code per recipient
    #[derive(Default)]
    struct Inbox {
        messages: Mutex<Vec<(String, String)>>,
    }

    impl Inbox {
        fn last_code(&self, email: &str) -> Option<String> {
            self.messages
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(to, _)| to == email)
                .map(|(_, code)| code.clone())
        }
    }

    #[async_trait]
    impl Notifier for Inbox {
        async fn send_verification_code(
            &self,
            email: &str,
            code: &str,
            _display_name: Option<&str>,
        ) -> Result<String, String> {
            self.messages.lock().unwrap().push((email.to_string(), code.to_string()));
            Ok(format!("msg_id_{}", Utc::now().timestamp()))
        }
    }

    #[tokio::test]
    async fn test_request_verify_reset_and_sweep() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let directory = Arc::new(InMemoryUserDirectory::with_accounts([Account::new(
            "grace@example.com".to_string(),
            Some("Grace".to_string()),
            "old-hash".to_string(),
        )]));
        let store = Arc::new(InMemoryVerificationStore::new());
        let inbox = Arc::new(Inbox::default());

        let service = PasswordResetService::new(
            Arc::clone(&directory),
            Arc::clone(&store),
            inbox.clone(),
            PasswordResetServiceConfig {
                bcrypt_cost: 4,
                ..PasswordResetServiceConfig::default()
            },
        )
        .with_clock(clock.clone());

        // Request and wait for delivery
        let result = service.request_reset("grace@example.com").await.unwrap();
        let outcome = result.notification.expect("account exists").await.unwrap();
        assert!(outcome.is_delivered());

        let code = inbox.last_code("grace@example.com").unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        // Lowercase entry matches and consumes under the default policy
        let verified = service
            .verify_code("grace@example.com", &code.to_lowercase())
            .await
            .unwrap();
        assert!(verified.consumed);

        // A fresh code is needed for the reset step
        let result = service.request_reset("grace@example.com").await.unwrap();
        result.notification.unwrap().await.unwrap();
        let code = inbox.last_code("grace@example.com").unwrap();

        service
            .reset_password("grace@example.com", &code, "correct horse", "correct horse")
            .await
            .unwrap();

        let account = directory.get("grace@example.com").await.unwrap();
        assert!(bcrypt::verify("correct horse", &account.password_hash).unwrap());

        let replay = service
            .reset_password("grace@example.com", &code, "another pass", "another pass")
            .await;
        assert!(matches!(
            replay,
            Err(DomainError::Reset(ResetError::InvalidOrExpiredCode))
        ));

        // An unknown email leaves an unconsumed record behind until it expires
        service.request_reset("ghost@example.com").await.unwrap();
        assert_eq!(store.len().await, 2);

        clock.advance(Duration::minutes(11));
        let cleanup = VerificationCleanupService::new(
            Arc::clone(&store),
            VerificationCleanupConfig { interval_seconds: 60, enabled: true },
        )
        .with_clock(clock.clone());

        assert_eq!(cleanup.run_cleanup().await.unwrap(), 2);
        assert!(store.is_empty().await);
        assert_eq!(store.purge_expired(clock.now()).await.unwrap(), 0);
    }
}
