//! Types for password reset service results

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::services::notification::NotificationOutcome;

/// Result of requesting a reset
///
/// `notification` is present exactly when the email belongs to an account,
/// so it must never reach the client. Callers render the same generic
/// acknowledgement whatever it holds.
#[derive(Debug)]
pub struct RequestResetResult {
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Background delivery, present only when an account was found
    pub notification: Option<JoinHandle<NotificationOutcome>>,
}

/// Result of a successful code verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeResult {
    pub expires_at: DateTime<Utc>,
    /// Whether this call consumed the code
    pub consumed: bool,
}
