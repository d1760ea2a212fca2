use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{UserDirectory, VerificationStore};
use sh_shared::types::ApiResponse;
use sh_shared::utils::email::mask_email;

use super::AppState;
use crate::dto::ForgotPasswordRequest;
use crate::handlers::{validation_response, ApiError};

/// Same message whether or not the account exists
pub const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account exists, a reset code has been sent to your email";

/// Handler for POST /api/v1/auth/forgot-password
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
/// - `200` with [`FORGOT_PASSWORD_MESSAGE`] for any well-formed email
/// - `422` when the email is missing or malformed
pub async fn forgot_password<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!(
            "Validation failed for forgot_password request on fields {:?}",
            errors.field_errors().keys().collect::<Vec<_>>()
        );
        return Ok(validation_response(&errors));
    }

    let request = request.into_inner();
    log::info!("Processing forgot_password request for {}", mask_email(&request.email));

    // Delivery continues detached from the response
    state.reset_service.request_reset(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FORGOT_PASSWORD_MESSAGE)))
}
