//! Outgoing mail configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Mail transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailDriver {
    /// Write messages to the log instead of delivering them
    #[default]
    Log,
    /// Deliver through an SMTP relay
    Smtp,
}

impl std::str::FromStr for MailDriver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(MailDriver::Log),
            "smtp" => Ok(MailDriver::Smtp),
            _ => Err(format!("Invalid mail driver: {}", s)),
        }
    }
}

/// SMTP and sender settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Which transport to build
    pub driver: MailDriver,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port (587 for STARTTLS)
    pub smtp_port: u16,

    /// SMTP username, if the relay requires authentication
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[serde(default, skip_serializing)]
    pub smtp_password: Option<String>,

    /// Envelope and header sender address
    pub from_address: String,

    /// Display name for the sender
    pub from_name: String,

    /// Product name used in message signatures
    pub app_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            driver: MailDriver::Log,
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from_address: String::from("no-reply@servicehub.local"),
            from_name: String::from("ServiceHub"),
            app_name: String::from("ServiceHub"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Overlay `MAIL_*` environment variables on `base`
    pub fn from_env_or(base: Self) -> Self {
        Self {
            driver: env_or("MAIL_DRIVER", base.driver),
            smtp_host: std::env::var("MAIL_HOST").unwrap_or(base.smtp_host),
            smtp_port: env_or("MAIL_PORT", base.smtp_port),
            smtp_username: std::env::var("MAIL_USERNAME").ok().or(base.smtp_username),
            smtp_password: std::env::var("MAIL_PASSWORD").ok().or(base.smtp_password),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(base.from_address),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(base.from_name),
            app_name: std::env::var("APP_NAME").unwrap_or(base.app_name),
        }
    }

    /// Whether SMTP credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.smtp_username.is_some() && self.smtp_password.is_some()
    }
}
