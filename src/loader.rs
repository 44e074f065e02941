//! Bulk Loader - transactional JSON import
//!
//! The import source is a UTF-8 JSON object mapping category names to
//! lists of entries:
//!
//! ```json
//! {"motivation": [{"quote": "Just do it.", "author": "Anon"}]}
//! ```
//!
//! `author` is optional per entry. The whole book is inserted in a single
//! transaction: either every record becomes visible or none do.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::storage::QuoteStore;
use crate::{Error, Result};

/// One entry of the import source
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEntry {
    /// Quote body (required in the source format)
    pub quote: String,
    /// Optional author; absent entries are stored as "Unknown"
    pub author: Option<String>,
}

/// Parsed import source: category name -> entries
pub type QuoteBook = BTreeMap<String, Vec<QuoteEntry>>;

/// Read and decode a JSON quote source.
///
/// A missing path is `SourceNotFound`; empty or malformed content is
/// `SourceInvalid`. An empty object `{}` is a valid, empty book.
pub fn parse_source(path: &Path) -> Result<QuoteBook> {
    tracing::info!("Importing quotes from {}", path.display());

    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Err(Error::SourceInvalid("source file is empty".to_string()));
    }

    serde_json::from_str(&contents).map_err(|e| Error::SourceInvalid(e.to_string()))
}

/// Insert every entry of `book` in one transaction.
///
/// Returns the number of records committed (0 for an empty book). On any
/// insert failure the transaction is rolled back and the error surfaced;
/// no partial import is ever visible.
pub fn import_quotes(store: &mut QuoteStore, book: &QuoteBook) -> Result<usize> {
    tracing::info!("Loading quotes into the database");

    store.begin_transaction()?;
    let mut staged = 0usize;
    for (category, entries) in book {
        for entry in entries {
            if let Err(err) = store.insert_quote(category, &entry.quote, entry.author.as_deref()) {
                let _ = store.rollback();
                return Err(err);
            }
            staged += 1;
        }
    }
    if let Err(err) = store.commit() {
        let _ = store.rollback();
        return Err(err);
    }

    tracing::info!("Committed {} quotes", staged);
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = parse_source(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn test_parse_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "empty.json", "");
        let err = parse_source(&path).unwrap_err();
        assert!(matches!(err, Error::SourceInvalid(_)));
    }

    #[test]
    fn test_parse_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "bad.json", "{not json");
        let err = parse_source(&path).unwrap_err();
        assert!(matches!(err, Error::SourceInvalid(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "array.json", r#"[{"quote": "A"}]"#);
        let err = parse_source(&path).unwrap_err();
        assert!(matches!(err, Error::SourceInvalid(_)));
    }

    #[test]
    fn test_empty_object_imports_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "empty-object.json", "{}");

        let book = parse_source(&path).unwrap();
        assert!(book.is_empty());

        let mut store = QuoteStore::init_in_memory().unwrap();
        let count = import_quotes(&mut store, &book).unwrap();
        assert_eq!(count, 0);
        assert_eq!(store.count_quotes().unwrap(), 0);
    }

    #[test]
    fn test_import_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_source(
            &dir,
            "quotes.json",
            r#"{
                "Motivation": [
                    {"quote": "Just do it.", "author": "Anon"},
                    {"quote": "Keep going."}
                ],
                "stoicism": [
                    {"quote": "The obstacle is the way.", "author": "Marcus Aurelius"}
                ]
            }"#,
        );

        let book = parse_source(&path).unwrap();
        let mut store = QuoteStore::init_in_memory().unwrap();
        let count = import_quotes(&mut store, &book).unwrap();
        assert_eq!(count, 3);

        // Mixed-case source keys land lowercased
        let motivation = store.list_quotes(Some("motivation")).unwrap();
        assert_eq!(motivation.len(), 2);
        assert_eq!(motivation[0].text, "Just do it.");
        assert_eq!(motivation[0].author, "Anon");

        let stoicism = store.list_quotes(Some("stoicism")).unwrap();
        assert_eq!(stoicism.len(), 1);
        assert_eq!(stoicism[0].author, "Marcus Aurelius");
    }

    #[test]
    fn test_import_wisdom_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write_source(
            &dir,
            "wisdom.json",
            r#"{"wisdom":[{"quote":"A","author":"X"},{"quote":"B"}]}"#,
        );

        let book = parse_source(&path).unwrap();
        let mut store = QuoteStore::init_in_memory().unwrap();
        let count = import_quotes(&mut store, &book).unwrap();
        assert_eq!(count, 2);

        let quotes = store.list_quotes(Some("wisdom")).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].author, "X");
        assert_eq!(quotes[1].text, "B");
        assert_eq!(quotes[1].author, "Unknown");
    }

    #[test]
    fn test_entry_missing_quote_field_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "noquote.json", r#"{"wisdom":[{"author":"X"}]}"#);
        let err = parse_source(&path).unwrap_err();
        assert!(matches!(err, Error::SourceInvalid(_)));
    }
}
