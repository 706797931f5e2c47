//! Static asset route
//!
//! `GET /static/data` returns `<static_dir>/data.json` byte for byte.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};

use super::errors::{ApiError, ApiResult};

/// File served under `/static/data`
pub const DATA_ASSET: &str = "data.json";

/// Static asset state
pub struct StaticState {
    pub dir: PathBuf,
}

impl StaticState {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Create static asset routes
pub fn static_routes(state: Arc<StaticState>) -> Router {
    Router::new()
        .route("/static/data", get(static_data_handler))
        .with_state(state)
}

async fn static_data_handler(
    State(state): State<Arc<StaticState>>,
) -> ApiResult<impl IntoResponse> {
    let path = state.dir.join(DATA_ASSET);

    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ApiError::RouteNotFound,
        _ => ApiError::Internal(format!("failed to read {}: {}", path.display(), e)),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
}
