//! In-memory book collection mirrored to a JSON file.
//!
//! The collection lives entirely in memory. Every mutating operation
//! rewrites the whole mirror file before returning, and the file is read
//! exactly once, by [`BookStore::load`].
//!
//! Writes go to `<file>.tmp`, are fsynced, then renamed over the mirror, so
//! a crash mid-write leaves the previous mirror intact. There is still no
//! rollback: if the write fails, the in-memory mutation stands and the
//! mirror is stale until the next successful save.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::book::{Book, BookFields, BookId};
use super::errors::{CatalogError, CatalogResult};
use crate::observability::{Event, Logger};

/// Ordered book collection plus the path of its mirror file
#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store that will mirror to `path`. Nothing is written
    /// until the first mutation.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            books: Vec::new(),
        }
    }

    /// Read the mirror file at `path`.
    ///
    /// A missing file yields an empty collection. Unreadable or malformed
    /// content is an error; callers treat it as fatal at startup.
    pub fn load(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let path_str = path.display().to_string();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Logger::event(Event::CatalogFileMissing, &[("path", path_str.as_str())]);
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(CatalogError::io(path, e)),
        };

        let books: Vec<Book> = serde_json::from_str(&content)
            .map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        let count = books.len().to_string();
        Logger::event(
            Event::CatalogLoaded,
            &[("books", count.as_str()), ("path", path_str.as_str())],
        );

        Ok(Self { path, books })
    }

    /// Rewrite the mirror file with the full collection.
    pub fn save(&self) -> CatalogResult<()> {
        let path_str = self.path.display().to_string();

        if let Err(e) = self.write_mirror() {
            let error = e.to_string();
            Logger::event(
                Event::CatalogSaveFailed,
                &[("error", error.as_str()), ("path", path_str.as_str())],
            );
            return Err(e);
        }

        let count = self.books.len().to_string();
        Logger::event(
            Event::CatalogSaved,
            &[("books", count.as_str()), ("path", path_str.as_str())],
        );
        Ok(())
    }

    fn write_mirror(&self) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
            }
        }

        let content = to_pretty_json(&self.books)?;
        let temp_path = self.temp_path();

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| CatalogError::io(&temp_path, e))?;

        file.write_all(&content)
            .map_err(|e| CatalogError::io(&temp_path, e))?;
        file.sync_all()
            .map_err(|e| CatalogError::io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(CatalogError::io(&self.path, e));
        }

        if let Some(parent) = self.path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Linear scan by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// The full collection, in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Append a new record and persist.
    ///
    /// The id is `count + 1`, not `max(id) + 1`: after a deletion this can
    /// hand out an id that is still held by a later record.
    pub fn insert(&mut self, fields: BookFields) -> CatalogResult<Book> {
        let id = self.books.len() as BookId + 1;
        let book = Book::from_fields(id, fields);

        self.books.push(book.clone());
        self.save()?;

        Ok(book)
    }

    /// Overwrite the first record with `id` and persist. `None` if absent,
    /// in which case nothing is written.
    pub fn update(&mut self, id: BookId, fields: BookFields) -> CatalogResult<Option<Book>> {
        let updated = match self.books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.apply(fields);
                book.clone()
            }
            None => return Ok(None),
        };

        self.save()?;
        Ok(Some(updated))
    }

    /// Remove every record with `id` and persist, even when nothing matched.
    /// Returns how many records were removed.
    pub fn delete(&mut self, id: BookId) -> CatalogResult<usize> {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        let removed = before - self.books.len();

        self.save()?;
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Mirror file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pretty JSON with four-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> CatalogResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(CatalogError::Serialize)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(name: &str) -> BookFields {
        BookFields::new(name, "Author", "Publisher")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");

        let store = BookStore::load(&path).unwrap();

        assert!(store.is_empty());
        assert!(!path.exists(), "load must not create the mirror");
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        fs::write(&path, "[{\"id\": 1, \"book_name\": ").unwrap();

        let result = BookStore::load(&path);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_record_missing_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        fs::write(&path, r#"[{"id": 1, "book_name": "A", "author": "X"}]"#).unwrap();

        assert!(BookStore::load(&path).is_err());
    }

    #[test]
    fn test_insert_assigns_count_plus_one() {
        let temp = TempDir::new().unwrap();
        let mut store = BookStore::load(temp.path().join("books.json")).unwrap();

        for expected in 1..=3 {
            let before = store.len() as BookId;
            let book = store.insert(fields("A")).unwrap();
            assert_eq!(book.id, before + 1);
            assert_eq!(book.id, expected);
        }
    }

    #[test]
    fn test_insert_after_delete_reuses_live_id() {
        let temp = TempDir::new().unwrap();
        let mut store = BookStore::load(temp.path().join("books.json")).unwrap();

        store.insert(fields("first")).unwrap();
        store.insert(fields("second")).unwrap();
        store.delete(1).unwrap();

        // count is 1, so the new record also gets id 2
        let third = store.insert(fields("third")).unwrap();
        assert_eq!(third.id, 2);
        assert_eq!(store.list().iter().filter(|b| b.id == 2).count(), 2);

        // get returns the first match, the older record
        assert_eq!(store.get(2).unwrap().book_name, "second");
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let temp = TempDir::new().unwrap();
        let mut store = BookStore::load(temp.path().join("books.json")).unwrap();
        store.insert(fields("A")).unwrap();
        store.insert(fields("B")).unwrap();

        let updated = store
            .update(1, BookFields::new("A2", "X2", "Y2"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(store.list()[0], updated);
        assert_eq!(store.list()[1].book_name, "B");
    }

    #[test]
    fn test_update_missing_leaves_collection_and_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        let mut store = BookStore::load(&path).unwrap();
        store.insert(fields("A")).unwrap();
        let on_disk = fs::read(&path).unwrap();

        let result = store.update(42, fields("Z")).unwrap();

        assert!(result.is_none());
        assert_eq!(store.list()[0].book_name, "A");
        assert_eq!(fs::read(&path).unwrap(), on_disk);
    }

    #[test]
    fn test_delete_missing_still_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        let mut store = BookStore::load(&path).unwrap();

        assert_eq!(store.delete(9).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        let mut store = BookStore::load(&path).unwrap();
        store.insert(fields("A")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"id\": 1,"));
        assert!(!temp.path().join("books.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data/nested/books.json");
        let mut store = BookStore::empty(&path);

        store.insert(fields("A")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_reload_reproduces_collection() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");

        let mut store = BookStore::load(&path).unwrap();
        store.insert(BookFields::new("Dune", "Herbert", "Chilton")).unwrap();
        store.insert(BookFields::new("Emma", "Austen", "Murray")).unwrap();
        store.update(1, BookFields::new("Dune", "Frank Herbert", "Chilton")).unwrap();
        let expected = store.list().to_vec();
        drop(store);

        let reloaded = BookStore::load(&path).unwrap();
        assert_eq!(reloaded.list(), expected.as_slice());
    }

    #[test]
    fn test_failed_save_keeps_memory_mutation() {
        let temp = TempDir::new().unwrap();
        // A directory where the mirror file should be makes the rename fail
        let path = temp.path().join("books.json");
        fs::create_dir(&path).unwrap();
        let mut store = BookStore::empty(&path);

        let result = store.insert(fields("A"));

        assert!(matches!(result, Err(CatalogError::Io { .. })));
        assert_eq!(store.len(), 1);
        assert!(!temp.path().join("books.json.tmp").exists());
    }

    #[test]
    fn test_load_accepts_negative_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        fs::write(
            &path,
            r#"[{"id": -1, "book_name": "A", "author": "X", "publisher": "Y"}]"#,
        )
        .unwrap();

        let store = BookStore::load(&path).unwrap();
        assert_eq!(store.get(-1).unwrap().book_name, "A");
        assert_eq!(store.path(), path.as_path());
    }
}
