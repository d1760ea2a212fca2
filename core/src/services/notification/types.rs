//! Types for notification delivery

/// Everything a notifier needs to deliver one code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationNotice {
    pub email: String,
    pub code: String,
    pub display_name: Option<String>,
}

/// How a detached delivery attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// Accepted by the channel
    Delivered { message_id: String },
    /// The channel reported an error
    Failed { error: String },
    /// No answer within the configured timeout
    TimedOut,
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}
