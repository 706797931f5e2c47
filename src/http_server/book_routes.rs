//! Book HTTP Routes
//!
//! CRUD endpoints over the shared `BookStore`, plus the welcome message.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::errors::{ApiError, ApiResult, MessageResponse};
use crate::catalog::{Book, BookFields, BookId, BookStore};

/// Root greeting
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Book API! Use /books to list all books or /book/<id> to manage a specific book.";

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    store: RwLock<BookStore>,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, BookStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("catalog lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, BookStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("catalog lock poisoned".to_string()))
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/books", get(list_books_handler))
        .route("/book", post(create_book_handler))
        .route(
            "/book/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Ids are plain non-negative integers; anything else does not match the route.
fn parse_id(raw: &str) -> ApiResult<BookId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse().map_err(|_| ApiError::RouteNotFound)
}

// ==================
// Handlers
// ==================

async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

async fn list_books_handler(State(state): State<Arc<BookState>>) -> ApiResult<Json<Vec<Book>>> {
    let store = state.read()?;
    Ok(Json(store.list().to_vec()))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Book>> {
    let id = parse_id(&raw_id)?;
    let store = state.read()?;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::BookNotFound)
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    body: Result<Json<BookFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(fields) = body?;
    let book = state.write()?.insert(fields)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<BookFields>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let id = parse_id(&raw_id)?;
    let Json(fields) = body?;
    let updated = state.write()?.update(id, fields)?;
    updated.map(Json).ok_or(ApiError::BookNotFound)
}

/// Always confirms, whether or not a record was removed.
async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id)?;
    state.write()?.delete(id)?;
    Ok(Json(MessageResponse::new("Book deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("0042").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::RouteNotFound)));
        assert!(matches!(parse_id("-1"), Err(ApiError::RouteNotFound)));
        assert!(matches!(parse_id("+1"), Err(ApiError::RouteNotFound)));
        assert!(matches!(parse_id("99999999999999999999999"), Err(ApiError::RouteNotFound)));
    }

    #[test]
    fn test_welcome_message_points_at_routes() {
        assert!(WELCOME_MESSAGE.contains("/books"));
        assert!(WELCOME_MESSAGE.contains("/book/<id>"));
    }
}
