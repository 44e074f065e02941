//! Quotekeeper CLI - manage a local quote collection

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use quotekeeper::storage::QuoteStore;
use quotekeeper::{Error, config, loader, ui};

/// Rows shown by `list` before output is truncated
const LIST_DISPLAY_CAP: usize = 5;

#[derive(Parser)]
#[command(name = "quote")]
#[command(version = "0.1.0")]
#[command(about = "Personal quote collection manager backed by a local SQLite file")]
#[command(long_about = r#"
Quotekeeper keeps a personal quote collection in a single SQLite file:
  • Bulk-import quotes from a JSON category map
  • Add single quotes with author and category
  • List quotes, filtered by category
  • Draw one quote uniformly at random

Example usage:
  quote init --file category.json
  quote add --category stoicism --text "The obstacle is the way." --author "Marcus Aurelius"
  quote list --category stoicism
  quote generate
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database and import quotes from a JSON file
    Init {
        /// Path to the JSON file containing quotes
        #[arg(short, long, default_value = "category.json")]
        file: PathBuf,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Add a new quote to the database
    Add {
        /// Category of the quote
        #[arg(short, long)]
        category: String,

        /// Text of the quote
        #[arg(short, long)]
        text: String,

        /// Author of the quote (defaults to "Unknown")
        #[arg(short, long)]
        author: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List quotes from the database
    List {
        /// Only show quotes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Print one quote drawn at random
    Generate {
        /// Only draw from this category
        #[arg(short, long)]
        category: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = run(cli.command) {
        tracing::error!("{}", err);
        report(&err);
        if err.is_fatal() {
            std::process::exit(1);
        }
    }
}

/// Surface an error as a short human-readable message.
///
/// Everything except the fatal not-initialized case is reported and the
/// process still exits 0; callers wanting strict signaling must inspect
/// the output text.
fn report(err: &Error) {
    ui::error(&err.to_string());
    match err {
        Error::SourceNotFound(_) | Error::SourceInvalid(_) => ui::warn("No quotes added."),
        _ => {}
    }
}

fn run(command: Commands) -> quotekeeper::Result<()> {
    match command {
        Commands::Init { file, database } => run_init(file, database),
        Commands::Add {
            category,
            text,
            author,
            database,
        } => run_add(category, text, author, database),
        Commands::List { category, database } => run_list(category, database),
        Commands::Generate { category, database } => run_generate(category, database),
    }
}

fn run_init(file: PathBuf, database: Option<PathBuf>) -> quotekeeper::Result<()> {
    let db_path = config::resolve_database_path(database);
    config::ensure_db_dir(&db_path)?;

    ui::status(ui::Icons::DATABASE, "Database", &db_path.display().to_string());

    let mut store = QuoteStore::initialize(&db_path)?;
    let book = loader::parse_source(&file)?;
    let count = loader::import_quotes(&mut store, &book)?;

    if count == 0 {
        ui::warn("No quotes added.");
    } else {
        ui::success(&format!("{} quotes added", count));
    }
    Ok(())
}

fn run_add(
    category: String,
    text: String,
    author: Option<String>,
    database: Option<PathBuf>,
) -> quotekeeper::Result<()> {
    let db_path = config::resolve_database_path(database);
    let store = QuoteStore::connect(&db_path)?;

    store.insert_quote(&category, &text, author.as_deref())?;
    ui::success("Quote added.");
    Ok(())
}

fn run_list(category: Option<String>, database: Option<PathBuf>) -> quotekeeper::Result<()> {
    let db_path = config::resolve_database_path(database);
    let store = QuoteStore::connect(&db_path)?;

    let quotes = store.list_quotes(category.as_deref())?;
    if quotes.is_empty() {
        match category {
            Some(cat) => ui::empty(&format!("No quotes found in {}", cat)),
            None => ui::empty("No quotes found."),
        }
        return Ok(());
    }

    let shown = quotes.len().min(LIST_DISPLAY_CAP);
    println!("{}", ui::quotes_table(&quotes[..shown]));
    if quotes.len() > LIST_DISPLAY_CAP {
        ui::status(
            ui::Icons::BOOK,
            "Showing",
            &format!("{} of {} quotes", shown, quotes.len()),
        );
    }
    Ok(())
}

fn run_generate(category: Option<String>, database: Option<PathBuf>) -> quotekeeper::Result<()> {
    let db_path = config::resolve_database_path(database);
    let store = QuoteStore::connect(&db_path)?;

    match store.random_quote(category.as_deref())? {
        Some(quote) => println!("{} {}", ui::Icons::SPARKLE, quote.display_line()),
        None => ui::empty("No quotes found."),
    }
    Ok(())
}
