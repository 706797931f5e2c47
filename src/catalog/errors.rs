//! # Catalog Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while reading or mirroring the book collection.
///
/// A failed save leaves the in-memory collection already mutated.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Io { .. } => "BOOKSHELF_CATALOG_IO",
            CatalogError::Parse { .. } => "BOOKSHELF_CATALOG_PARSE",
            CatalogError::Serialize(_) => "BOOKSHELF_CATALOG_SERIALIZE",
        }
    }
}
