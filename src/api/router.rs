use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{AppConfig, CorsConfig};

use super::middleware::{
    error_details_middleware, logging_middleware, security_headers_middleware,
};
use super::state::AppState;
use super::types::ApiError;
use super::{auth, health, inquiries, projects};

/// Create the full router with application state
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth::create_auth_router())
        .nest("/inquiries", inquiries::create_inquiries_router())
        .nest(
            "/projects",
            projects::create_projects_router(config.uploads.max_file_size),
        );

    let uploads_dir = config.uploads.public_dir.join("uploads");

    let mut router = Router::new()
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware));

    if config.server.environment.is_development() {
        router = router.layer(middleware::from_fn(error_details_middleware));
    }

    router
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Mirrors the caller's origin unless an allow-list is configured
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .expose_headers([
            header::CONTENT_RANGE,
            HeaderName::from_static("x-content-range"),
        ])
}
