//! SMTP delivery through lettre's async transport

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

use sh_core::services::notification::Notifier;
use sh_shared::config::MailConfig;

use super::template::VerificationEmail;
use crate::InfrastructureError;

/// Implicit TLS port; everything else negotiates STARTTLS
const SMTPS_PORT: u16 = 465;

/// Per-command SMTP timeout
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Notifier delivering reset codes over SMTP
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    app_name: String,
    expiration_minutes: i64,
}

impl SmtpNotifier {
    /// Build the transport from mail settings
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(config: &MailConfig, expiration_minutes: i64) -> Result<Self, InfrastructureError> {
        let address: Address = config
            .from_address
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid from address: {}", e)))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let relay = if config.smtp_port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        };

        let builder = relay
            .map_err(|e| InfrastructureError::Mail(format!("Failed to create SMTP transport: {}", e)))?
            .port(config.smtp_port)
            .timeout(Some(SMTP_TIMEOUT));

        let builder = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            authenticated = config.has_credentials(),
            "SMTP notifier configured"
        );

        Ok(Self {
            transport: builder.build(),
            from,
            app_name: config.app_name.clone(),
            expiration_minutes,
        })
    }

    fn build_message(
        &self,
        email: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<Message, String> {
        let to: Address = email
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        let content = VerificationEmail {
            code,
            display_name,
            expiration_minutes: self.expiration_minutes,
            app_name: &self.app_name,
        };

        Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(display_name.map(str::to_string), to))
            .subject(content.subject())
            .multipart(MultiPart::alternative_plain_html(
                content.text_body(),
                content.html_body(),
            ))
            .map_err(|e| format!("Failed to create email: {}", e))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<String, String> {
        let message = self.build_message(email, code, display_name)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {}", e))?;

        Ok(response.message().collect::<Vec<_>>().join(" "))
    }
}
