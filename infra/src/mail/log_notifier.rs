//! Development notifier that writes reset emails to the log
//!
//! Never enable outside development: the code is logged in clear.

use async_trait::async_trait;
use uuid::Uuid;

use sh_core::services::notification::Notifier;

use super::template::VerificationEmail;

pub struct LogNotifier {
    app_name: String,
    expiration_minutes: i64,
}

impl LogNotifier {
    pub fn new(app_name: impl Into<String>, expiration_minutes: i64) -> Self {
        Self {
            app_name: app_name.into(),
            expiration_minutes,
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<String, String> {
        let message = VerificationEmail {
            code,
            display_name,
            expiration_minutes: self.expiration_minutes,
            app_name: &self.app_name,
        };
        let message_id = format!("log-{}", Uuid::new_v4());

        tracing::info!(
            to = email,
            subject = message.subject(),
            message_id = %message_id,
            body = %message.text_body(),
            event = "mail_logged",
            "Mail driver is 'log'; message not delivered"
        );

        Ok(message_id)
    }

    fn channel(&self) -> &'static str {
        "log"
    }
}
