//! SQLite storage implementation

use std::path::Path;

use chrono::Utc;
use rand::seq::SliceRandom;
use rusqlite::{Connection, params};

use crate::quote::{DEFAULT_AUTHOR, Quote, normalize_category};
use crate::{Error, Result};

use super::schema;

/// SQLite-backed store for the quote collection
pub struct QuoteStore {
    conn: Connection,
}

impl QuoteStore {
    /// Create or reset the database at `path`.
    ///
    /// Idempotent: an existing quotes table is dropped and recreated empty,
    /// so two initializations in a row both yield an empty store.
    pub fn initialize(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.reset_schema()?;
        Ok(store)
    }

    /// Open an existing database at `path`.
    ///
    /// Refuses to create a missing file: absence of the file means the
    /// store was never initialized, and creating one here would mask that.
    pub fn connect(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotInitialized(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing)
    pub fn init_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.reset_schema()?;
        Ok(store)
    }

    /// Drop any existing quotes table and recreate it empty
    fn reset_schema(&self) -> Result<()> {
        self.conn.execute(schema::DROP_QUOTES_TABLE, [])?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Record Operations ==========

    /// Insert one quote and return its row id.
    ///
    /// The category is lowercased before storage; a missing author is
    /// recorded as "Unknown". The timestamp is stamped at insert time.
    pub fn insert_quote(&self, category: &str, text: &str, author: Option<&str>) -> Result<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO quotes (text, author, category, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    text,
                    author.unwrap_or(DEFAULT_AUTHOR),
                    normalize_category(category),
                    Utc::now(),
                ],
            )
            .map_err(Error::Write)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List quotes, optionally restricted to one category.
    ///
    /// The filter is lowercased before comparison, matching the storage
    /// normalization. Returns the full matching set in id order; display
    /// truncation is the caller's concern.
    pub fn list_quotes(&self, category: Option<&str>) -> Result<Vec<Quote>> {
        let quotes = match category {
            Some(cat) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, text, author, category, created_at FROM quotes WHERE category = ?1 ORDER BY id",
                )?;
                let quotes = stmt
                    .query_map([normalize_category(cat)], |row| self.row_to_quote(row))?
                    .filter_map(|r| r.ok())
                    .collect();
                quotes
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, text, author, category, created_at FROM quotes ORDER BY id",
                )?;
                let quotes = stmt
                    .query_map([], |row| self.row_to_quote(row))?
                    .filter_map(|r| r.ok())
                    .collect();
                quotes
            }
        };

        Ok(quotes)
    }

    /// Pick one quote uniformly at random from the matching set.
    ///
    /// Returns `None` when no quote matches. The candidate set is fully
    /// materialized, which is fine at personal-collection scale.
    pub fn random_quote(&self, category: Option<&str>) -> Result<Option<Quote>> {
        let quotes = self.list_quotes(category)?;
        Ok(quotes.choose(&mut rand::thread_rng()).cloned())
    }

    /// Count all quotes
    pub fn count_quotes(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", []).map_err(Error::Write)?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Helper to convert a row to a Quote
    fn row_to_quote(&self, row: &rusqlite::Row) -> rusqlite::Result<Quote> {
        Ok(Quote {
            id: row.get(0)?,
            text: row.get(1)?,
            author: row.get(2)?,
            category: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
