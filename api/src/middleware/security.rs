//! Security middleware for the reset endpoints.
//!
//! - Rejects plain HTTP in production unless a trusted proxy vouches for TLS
//! - Marks every response `Cache-Control: no-store`
//! - Adds HSTS and the usual hardening headers in production

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorForbidden,
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use sh_shared::config::{Environment, ServerConfig};

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    /// Whether plain HTTP requests are refused
    enforce_https: bool,
    /// Whether HSTS and hardening headers are added
    add_security_headers: bool,
    /// Peers whose `X-Forwarded-Proto` is believed
    trusted_proxies: Arc<Vec<String>>,
}

impl SecurityMiddleware {
    /// Production gets full enforcement; other environments only `no-store`
    pub fn new(server: &ServerConfig, environment: Environment) -> Self {
        let production = environment.is_production();

        log::info!(
            "Security middleware configured: enforce_https={}, add_headers={}, trusted_proxies={:?}",
            production,
            production,
            server.trusted_proxies
        );

        Self {
            enforce_https: production,
            add_security_headers: production,
            trusted_proxies: Arc::new(server.trusted_proxies.clone()),
        }
    }

    /// No HTTPS enforcement, no extra headers beyond `no-store`
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: Arc::new(vec!["127.0.0.1".to_string(), "::1".to_string()]),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: Arc::clone(&self.trusted_proxies),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Arc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = Arc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                log::warn!("Insecure request blocked: {} {}", req.method(), req.path());
                return Err(ErrorForbidden("HTTPS required"));
            }

            let mut response = service.call(req).await?;

            // Reset codes and outcomes must never land in a shared cache
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// HTTPS directly, or HTTPS terminated at a trusted proxy
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    let conn_info = req.connection_info();
    if conn_info.scheme() == "https" {
        return true;
    }

    let forwarded_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false);

    forwarded_https
        && req
            .peer_addr()
            .map(|addr| is_trusted_proxy(&addr.ip().to_string(), trusted_proxies))
            .unwrap_or(false)
}

fn is_trusted_proxy(ip: &str, trusted_proxies: &[String]) -> bool {
    trusted_proxies.iter().any(|trusted| trusted == ip)
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    fn production_config(trusted: &[&str]) -> ServerConfig {
        ServerConfig {
            trusted_proxies: trusted.iter().map(|p| p.to_string()).collect(),
            ..ServerConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_development_adds_no_store_only() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityMiddleware::development())
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
        assert!(resp.headers().get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }

    #[actix_web::test]
    async fn test_production_blocks_plain_http() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityMiddleware::new(&production_config(&[]), Environment::Production))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let result =
            test::try_call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        let error = result.err().expect("plain HTTP should be refused");
        assert_eq!(error.as_response_error().status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_production_trusts_forwarded_proto_from_proxy() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityMiddleware::new(
                    &production_config(&["10.0.0.1"]),
                    Environment::Production,
                ))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .peer_addr("10.0.0.1:40000".parse().unwrap())
            .insert_header(("x-forwarded-proto", "https"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::STRICT_TRANSPORT_SECURITY).is_some());
        assert_eq!(resp.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }

    #[::core::prelude::v1::test]
    fn test_is_trusted_proxy() {
        let trusted = vec!["10.0.0.1".to_string()];
        assert!(is_trusted_proxy("10.0.0.1", &trusted));
        assert!(!is_trusted_proxy("10.0.0.2", &trusted));
    }
}
