//! Password reset route handlers
//!
//! - `POST /forgot-password` issues a code
//! - `POST /verify-reset-code` checks a code
//! - `POST /reset-password` replaces the password

pub mod forgot_password;
pub mod reset_password;
pub mod verify_reset_code;

pub use forgot_password::forgot_password;
pub use reset_password::reset_password;
pub use verify_reset_code::verify_reset_code;

use actix_web::web;
use std::sync::Arc;

use sh_core::repositories::{UserDirectory, VerificationStore};
use sh_core::services::password_reset::PasswordResetService;

/// Application state that holds shared services
pub struct AppState<U, S>
where
    U: UserDirectory,
    S: VerificationStore,
{
    pub reset_service: Arc<PasswordResetService<U, S>>,
}

impl<U: UserDirectory, S: VerificationStore> AppState<U, S> {
    pub fn new(reset_service: Arc<PasswordResetService<U, S>>) -> Self {
        Self { reset_service }
    }
}

/// Register the three endpoints on a scope or app
pub fn configure<U, S>(cfg: &mut web::ServiceConfig)
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    cfg.route("/forgot-password", web::post().to(forgot_password::<U, S>))
        .route("/verify-reset-code", web::post().to(verify_reset_code::<U, S>))
        .route("/reset-password", web::post().to(reset_password::<U, S>));
}
