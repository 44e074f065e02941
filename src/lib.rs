//! # Quotekeeper - Personal quote collection manager
//!
//! A local quote store backed by a single SQLite file.
//!
//! Quotekeeper provides:
//! - One-table embedded storage for quotes (text, author, category, timestamp)
//! - Transactional bulk import from a JSON category map
//! - Filtered listing and uniform random selection
//! - A thin CLI (`quote`) over the library API

pub mod config;
pub mod loader;
pub mod quote;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use loader::{QuoteBook, QuoteEntry};
pub use quote::Quote;
pub use storage::QuoteStore;

/// Result type alias for quotekeeper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quotekeeper operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(std::path::PathBuf),

    #[error("Invalid quote source: {0}")]
    SourceInvalid(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Database not initialized at {}: run `quote init` first", .0.display())]
    NotInitialized(std::path::PathBuf),

    #[error("Write failed: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error must terminate the process.
    ///
    /// Connecting to a store that was never initialized is the only fatal
    /// condition; every other error is reported and the process exits clean.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::NotInitialized(_))
    }
}
