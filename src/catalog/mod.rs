//! # Catalog
//!
//! The book collection and its JSON mirror file.
//!
//! - `book`: record and field types (the wire and file shape)
//! - `store`: `BookStore`, the ordered in-memory collection
//! - `errors`: I/O and parse failures

pub mod book;
pub mod errors;
pub mod store;

pub use book::{Book, BookFields, BookId};
pub use errors::{CatalogError, CatalogResult};
pub use store::BookStore;
