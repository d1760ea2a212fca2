//! Mapping of domain and request errors to HTTP responses
//!
//! | Error                               | Status |
//! |-------------------------------------|--------|
//! | `DomainError::ValidationErr`        | 422    |
//! | malformed JSON body                 | 422    |
//! | `DomainError::Reset(_)`             | 400    |
//! | `DomainError::Internal`             | 500    |

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use std::collections::HashMap;
use thiserror::Error;

use sh_core::errors::DomainError;
use sh_shared::types::ApiResponse;

/// Top-level message of every 422 response
pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Message returned for 500 responses; details stay in the log
pub const INTERNAL_MESSAGE: &str = "An internal error occurred. Please try again later.";

/// A domain error on its way out of a handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::ValidationErr(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Reset(_) => StatusCode::BAD_REQUEST,
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            DomainError::ValidationErr(error) => {
                let mut fields = HashMap::new();
                fields.insert(error.field().to_string(), vec![error.to_string()]);
                ApiResponse::validation(VALIDATION_MESSAGE, fields)
            }
            DomainError::Reset(error) => ApiResponse::error(error.to_string()),
            DomainError::Internal { message } => {
                log::error!("Internal error: {}", message);
                ApiResponse::error(INTERNAL_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 422 response listing every failed field
pub fn validation_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let fields: HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    HttpResponse::UnprocessableEntity().json(ApiResponse::validation(VALIDATION_MESSAGE, fields))
}

/// `JsonConfig` error handler: unreadable bodies answer 422 in the usual envelope
pub fn json_error_handler(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), error);

    let mut fields = HashMap::new();
    fields.insert("body".to_string(), vec![error.to_string()]);
    let response =
        HttpResponse::UnprocessableEntity().json(ApiResponse::validation(VALIDATION_MESSAGE, fields));

    InternalError::from_response(error, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("The requested resource was not found"))
}
