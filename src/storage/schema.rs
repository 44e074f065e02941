//! Database schema definitions

/// SQL to create the quotes table
pub const CREATE_QUOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    author TEXT NOT NULL,
    category TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

/// SQL to drop the quotes table during reinitialization
pub const DROP_QUOTES_TABLE: &str = "DROP TABLE IF EXISTS quotes";

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_quotes_text ON quotes(text)",
    "CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes(category)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_QUOTES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statement_order() {
        let stmts = all_schema_statements();
        // Table first, then its indexes
        assert_eq!(stmts[0], CREATE_QUOTES_TABLE);
        assert_eq!(stmts.len(), 1 + CREATE_INDEXES.len());
    }
}
