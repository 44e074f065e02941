//! Quote record type
//!
//! A quote is the sole stored entity: the body text, an attributed author
//! (defaulting to "Unknown"), a lowercase category tag, and the creation
//! timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded when the caller supplies none
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Normalize a category tag for storage and filtering.
///
/// Categories are stored lowercase so filters are case-insensitive; the
/// same normalization is applied to filter arguments before comparison.
pub fn normalize_category(category: &str) -> String {
    category.to_lowercase()
}

/// A stored quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Row id assigned by the storage engine, monotonically increasing,
    /// never reused
    pub id: i64,
    /// Quote body
    pub text: String,
    /// Attributed author, "Unknown" when none was supplied
    pub author: String,
    /// Category tag, always lowercase as stored
    pub category: String,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// One-line rendering used by `generate` and log lines
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Quote {}
