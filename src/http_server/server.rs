//! # HTTP Server
//!
//! Combines the book, static, and health routers into one Axum app and
//! serves it until Ctrl-C.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, log_request, not_found_handler};
use super::static_routes::{static_routes, StaticState};
use crate::catalog::BookStore;
use crate::observability::{Event, Logger};

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around an already loaded store
    pub fn new(config: HttpServerConfig, store: BookStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, store: BookStore) -> Router {
        let book_state = Arc::new(BookState::new(store));
        let static_state = Arc::new(StaticState::new(config.static_dir.clone()));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(book_routes(book_state))
            .merge(static_routes(static_state))
            .merge(health_routes())
            .fallback(not_found_handler)
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(log_request))
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();

        Logger::event(Event::Serving, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::event(Event::Shutdown, &[("addr", addr.as_str())]);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
