//! Trait for notification channel integration

use async_trait::async_trait;

/// Channel that delivers a verification code to its owner
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the code, returning a provider message id
    ///
    /// `display_name` personalizes the greeting when present.
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<String, String>;

    /// Short channel name for log events
    fn channel(&self) -> &'static str {
        "email"
    }
}
