//! Observability for bookshelf
//!
//! Structured JSON logging plus a closed set of typed lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{Event, Logger, Severity};
//!
//! Logger::event(Event::CatalogLoaded, &[("books", "3")]);
//! Logger::log(Severity::Warn, "SOMETHING_ODD", &[("path", "books.json")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
