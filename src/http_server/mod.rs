//! # Bookshelf HTTP Server Module
//!
//! Axum routers over the book catalog.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome message
//! - `GET /books` - Full collection
//! - `POST /book` - Create
//! - `GET|PUT|DELETE /book/:id` - Read, overwrite, remove one book
//! - `GET /static/data` - Raw `data.json` asset
//! - `GET /health` - Health check

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod static_routes;

pub use book_routes::{BookState, WELCOME_MESSAGE};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::HttpServer;
