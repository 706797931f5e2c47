//! bookshelf - a book catalog HTTP service
//!
//! An ordered in-memory collection of books, mirrored to a JSON file after
//! every mutation and exposed over a small JSON HTTP API.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
