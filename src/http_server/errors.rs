//! # HTTP API Errors
//!
//! Every error body has the same shape as the success messages:
//! `{"message": "..."}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::observability::{Event, Logger};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No book with the requested id
    #[error("Book not found")]
    BookNotFound,

    /// No route matched, or the path parameter was not a valid id
    #[error("Not Found")]
    RouteNotFound,

    /// Body missing, not JSON, or lacking a required field
    #[error("{0}")]
    InvalidBody(String),

    /// Body could not be buffered (e.g. over the size limit)
    #[error("{message}")]
    BodyUnreadable { status: StatusCode, message: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Mirror file could not be written
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BookNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyUnreadable { status, .. } => *status,
            ApiError::Catalog(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Data, syntax, and content-type problems are 400; failures to read the
/// body keep their own status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(inner) => ApiError::BodyUnreadable {
                status: inner.status(),
                message: inner.body_text(),
            },
            other => ApiError::InvalidBody(other.body_text()),
        }
    }
}

/// `{"message": ...}` body used for confirmations and errors alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            Logger::event(Event::HttpInternalError, &[("error", message.as_str())]);
        }
        (status, Json(MessageResponse::new(message))).into_response()
    }
}
