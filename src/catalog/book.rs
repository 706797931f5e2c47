//! Book record types

use serde::{Deserialize, Serialize};

/// Book identifier. Assigned by the store, never by callers. Signed so a
/// hand-edited mirror file with negative ids still loads.
pub type BookId = i64;

/// A single catalog entry, as stored in the mirror file and returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

/// The caller-supplied part of a book: everything except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

impl BookFields {
    pub fn new(
        book_name: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            book_name: book_name.into(),
            author: author.into(),
            publisher: publisher.into(),
        }
    }
}

impl Book {
    /// Build a record from an assigned id and caller fields
    pub fn from_fields(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            book_name: fields.book_name,
            author: fields.author,
            publisher: fields.publisher,
        }
    }

    /// Overwrite every caller-editable field in place
    pub fn apply(&mut self, fields: BookFields) {
        self.book_name = fields.book_name;
        self.author = fields.author;
        self.publisher = fields.publisher;
    }
}
