//! Detached, time-bounded delivery

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use sh_shared::utils::email::mask_email;

use super::traits::Notifier;
use super::types::{NotificationOutcome, VerificationNotice};

/// Spawn a single delivery attempt bounded by `timeout`
///
/// Failures never reach the caller of the reset flow; they are logged here
/// and returned through the handle for anyone who wants to await it.
pub fn dispatch(
    notifier: Arc<dyn Notifier>,
    notice: VerificationNotice,
    timeout: Duration,
) -> JoinHandle<NotificationOutcome> {
    tokio::spawn(async move {
        let masked = mask_email(&notice.email);
        let channel = notifier.channel();

        let attempt = notifier.send_verification_code(
            &notice.email,
            &notice.code,
            notice.display_name.as_deref(),
        );

        match tokio::time::timeout(timeout, attempt).await {
            Ok(Ok(message_id)) => {
                tracing::info!(
                    email = %masked,
                    channel,
                    message_id = %message_id,
                    event = "reset_code_delivered",
                    "Password reset code delivered"
                );
                NotificationOutcome::Delivered { message_id }
            }
            Ok(Err(error)) => {
                tracing::error!(
                    email = %masked,
                    channel,
                    error = %error,
                    event = "reset_code_delivery_failed",
                    "Failed to deliver password reset code"
                );
                NotificationOutcome::Failed { error }
            }
            Err(_) => {
                tracing::error!(
                    email = %masked,
                    channel,
                    timeout_secs = timeout.as_secs(),
                    event = "reset_code_delivery_timeout",
                    "Password reset code delivery timed out"
                );
                NotificationOutcome::TimedOut
            }
        }
    })
}
