//! Out-of-band delivery of verification codes
//!
//! Delivery is detached from the request: the reset service hands a notice
//! to [`dispatch`], which runs the notifier on its own task under a timeout
//! and reports the outcome through structured log events.

mod dispatch;
mod traits;
mod types;

pub use dispatch::dispatch;
pub use traits::Notifier;
pub use types::{NotificationOutcome, VerificationNotice};
