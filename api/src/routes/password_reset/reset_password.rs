use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{UserDirectory, VerificationStore};
use sh_shared::types::ApiResponse;
use sh_shared::utils::email::mask_email;

use super::AppState;
use crate::dto::ResetPasswordRequest;
use crate::handlers::{validation_response, ApiError};

pub const RESET_PASSWORD_MESSAGE: &str = "Password has been reset successfully";

/// Handler for POST /api/v1/auth/reset-password
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "code": "AB12CD",
///     "password": "new-password",
///     "password_confirmation": "new-password"
/// }
/// ```
///
/// # Responses
/// - `200` with [`RESET_PASSWORD_MESSAGE`]
/// - `400` for an invalid, expired or used code, or "User not found"
/// - `422` for validation failures
pub async fn reset_password<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!(
            "Validation failed for reset_password request on fields {:?}",
            errors.field_errors().keys().collect::<Vec<_>>()
        );
        return Ok(validation_response(&errors));
    }

    let request = request.into_inner();
    state
        .reset_service
        .reset_password(
            &request.email,
            &request.code,
            &request.password,
            &request.password_confirmation,
        )
        .await?;

    log::info!("Password reset completed for {}", mask_email(&request.email));

    Ok(HttpResponse::Ok().json(ApiResponse::success(RESET_PASSWORD_MESSAGE)))
}
