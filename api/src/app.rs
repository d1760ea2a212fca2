//! Application factory
//!
//! Builds the Actix-web application around an already wired
//! `PasswordResetService`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::{create_cors, SecurityMiddleware};
use crate::routes::password_reset::{self, AppState};

use sh_core::repositories::{UserDirectory, VerificationStore};
use sh_shared::config::AppConfig;
use sh_shared::types::HealthResponse;

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "servicehub-password-reset";

/// Create and configure the application with all dependencies
///
/// The reset endpoints are mounted under `/api/v1/auth` and, for older
/// clients, at the root path.
pub fn create_app<U, S>(
    app_state: web::Data<AppState<U, S>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserDirectory + 'static,
    S: VerificationStore + 'static,
{
    let cors = create_cors(&config.server, config.environment);
    let security = SecurityMiddleware::new(&config.server, config.environment);
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Registration order: security runs first, then CORS, then logging
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/v1/auth").configure(password_reset::configure::<U, S>))
        .configure(password_reset::configure::<U, S>)
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
