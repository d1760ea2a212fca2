use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{UserDirectory, VerificationStore};
use sh_shared::types::ApiResponse;
use sh_shared::utils::email::mask_email;

use super::AppState;
use crate::dto::VerifyResetCodeRequest;
use crate::handlers::{validation_response, ApiError};

pub const VERIFY_CODE_MESSAGE: &str = "Verification code is valid";

/// Handler for POST /api/v1/auth/verify-reset-code
///
/// Whether a successful check consumes the code depends on the configured
/// verify policy.
///
/// # Responses
/// - `200` with [`VERIFY_CODE_MESSAGE`]
/// - `400` "Invalid or expired verification code"
/// - `422` when email or code is missing
pub async fn verify_reset_code<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<VerifyResetCodeRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!(
            "Validation failed for verify_reset_code request on fields {:?}",
            errors.field_errors().keys().collect::<Vec<_>>()
        );
        return Ok(validation_response(&errors));
    }

    let request = request.into_inner();
    let result = state
        .reset_service
        .verify_code(&request.email, &request.code)
        .await?;

    log::info!(
        "Reset code verified for {} (consumed: {})",
        mask_email(&request.email),
        result.consumed
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(VERIFY_CODE_MESSAGE)))
}
