//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with one table:
//! - quotes(id, text, author, category, created_at)
//!
//! One `QuoteStore` wraps exactly one connection and lives for a single
//! CLI invocation; it is dropped (releasing the file) on every exit path.
//! Concurrent invocations against the same file rely on SQLite's own
//! locking, which this layer does not extend.

pub mod schema;
pub mod sqlite;

pub use sqlite::QuoteStore;
