//! Terminal output helpers
//!
//! Styled status lines, icons, and the quote table. Colors degrade to
//! plain text when stdout is not a terminal; `QUOTE_QUIET=1` suppresses
//! the chatty status lines while leaving results intact.

use std::sync::OnceLock;

use owo_colors::{OwoColorize, Style};
use tabled::{Table, Tabled, settings::Style as TableStyle};

use crate::quote::Quote;

static THEME: OnceLock<Theme> = OnceLock::new();
static QUIET: OnceLock<bool> = OnceLock::new();

/// Icon set used across the CLI
pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const DATABASE: &str = "🗄️";
    pub const BOOK: &str = "📖";
    pub const SPARKLE: &str = "✨";
    pub const EMPTY: &str = "∅";
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub dim: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

/// Whether chatty status output is suppressed (QUOTE_QUIET=1)
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("QUOTE_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

/// Empty-result line, distinct from an error
pub fn empty(label: &str) {
    println!("{} {}", Icons::EMPTY, label.style(theme().dim.clone()));
}

/// Row shape for the `list` table
#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Quote")]
    text: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Render quotes as a rounded table
pub fn quotes_table(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return String::new();
    }

    let rows: Vec<QuoteRow> = quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| QuoteRow {
            index: i + 1,
            text: quote.text.clone(),
            author: quote.author.clone(),
            category: quote.category.clone(),
        })
        .collect();

    Table::new(&rows).with(TableStyle::rounded()).to_string()
}
