//! Business services containing domain logic and use cases.

pub mod clock;
pub mod code_generator;
pub mod notification;
pub mod password_reset;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use code_generator::{CodeGenerator, SecureCodeGenerator};
pub use notification::{NotificationOutcome, Notifier, VerificationNotice};
pub use password_reset::{
    PasswordResetService, PasswordResetServiceConfig,
    RequestResetResult, VerifyCodeResult,
    VerificationCleanupConfig, VerificationCleanupService,
};
