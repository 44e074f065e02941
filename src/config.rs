//! Database path resolution and optional config file
//!
//! Precedence for the database location: the `--database` flag, then the
//! `DATABASE_PATH` environment variable, then the `database` key of
//! `quotekeeper.toml`, then the default `.quotekeeper/quotes.db`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the database location
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("quotekeeper.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from(".quotekeeper").join("quotes.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QuoteConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QuoteConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Resolve the database file location for this invocation.
///
/// An unreadable config file is logged and skipped rather than failing the
/// operation; resolution always produces a path.
pub fn resolve_database_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Ok(path) = std::env::var(DATABASE_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    match load_config(None) {
        Ok(Some(config)) => {
            if let Some(database) = config.database {
                return PathBuf::from(database);
            }
        }
        Ok(None) => {}
        Err(err) => tracing::warn!("Ignoring unreadable config: {}", err),
    }

    default_database_path()
}

pub fn ensure_db_dir(db_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
