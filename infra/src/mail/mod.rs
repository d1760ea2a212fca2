//! Mail module - verification code delivery
//!
//! Provides the [`Notifier`] implementations selected by `MAIL_DRIVER`:
//! - `smtp`: real delivery through lettre
//! - `log`: development driver that only logs the rendered message

mod log_notifier;
mod smtp;
pub mod template;

use std::sync::Arc;

use sh_core::services::notification::Notifier;
use sh_shared::config::{MailConfig, MailDriver};

use crate::InfrastructureError;

pub use log_notifier::LogNotifier;
pub use smtp::SmtpNotifier;
pub use template::VerificationEmail;

/// Build the notifier selected by the mail configuration
///
/// `expiration_minutes` is quoted in the message body and should match the
/// reset code lifetime.
pub fn create_notifier(
    config: &MailConfig,
    expiration_minutes: i64,
) -> Result<Arc<dyn Notifier>, InfrastructureError> {
    match config.driver {
        MailDriver::Smtp => {
            tracing::info!("Using SMTP mail driver");
            Ok(Arc::new(SmtpNotifier::new(config, expiration_minutes)?))
        }
        MailDriver::Log => {
            tracing::warn!("Using log mail driver; reset codes will not be delivered");
            Ok(Arc::new(LogNotifier::new(config.app_name.clone(), expiration_minutes)))
        }
    }
}
