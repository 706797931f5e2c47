//! Observability HTTP Routes
//!
//! Health check plus the per-request log line middleware.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::errors::ApiError;
use crate::observability::{Event, Logger};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Router fallback for unmatched paths
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

/// Emit one `HTTP_REQUEST` line per request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    Logger::event(
        Event::HttpRequest,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
        ],
    );
    response
}
