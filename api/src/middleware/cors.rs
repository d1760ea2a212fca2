//! CORS configuration for browser clients of the reset endpoints.
//!
//! Development allows any origin. Staging and production only allow the
//! origins listed in `ServerConfig::allowed_origins` (`ALLOWED_ORIGINS`).

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sh_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for `environment`.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_development() {
        create_development_cors(server.cors_max_age)
    } else {
        create_restricted_cors(&server.allowed_origins, server.cors_max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring permissive CORS for development");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

/// Only the configured origins; an empty list blocks every cross-origin call.
fn create_restricted_cors(allowed_origins: &[String], max_age: usize) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if allowed_origins.is_empty() {
        log::warn!("No ALLOWED_ORIGINS configured; cross-origin requests will be rejected");
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    fn server(origins: &[&str]) -> ServerConfig {
        ServerConfig {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            ..ServerConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_production_allows_listed_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&server(&["https://app.example.com"]), Environment::Production))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://app.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example.com"
        );
    }

    #[actix_web::test]
    async fn test_production_rejects_unlisted_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&server(&["https://app.example.com"]), Environment::Production))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        match resp {
            Ok(resp) => assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none()),
            Err(e) => assert_eq!(e.as_response_error().status_code(), StatusCode::BAD_REQUEST),
        }
    }
}
