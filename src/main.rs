//! Stockroom CLI - interactive inventory tracker with a purchase ledger

use clap::Parser;
use std::io;
use std::path::PathBuf;
use stockroom::storage::SqliteStore;
use stockroom::ui::{self, Icons};
use stockroom::{config, shell};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version = "0.1.0")]
#[command(about = "Single-user inventory tracker with a SQLite-backed purchase ledger")]
#[command(long_about = r#"
Stockroom keeps a catalog of products and an append-only purchase ledger
in a local SQLite database, driven from an interactive menu.

Example usage:
  stockroom                      # inventory.db in the current directory
  stockroom --database shop.db   # explicit database file
"#)]
struct Cli {
    /// Path to the database file (overrides stockroom.toml)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so the interactive surface stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let db_path = config::resolve_database_path(cli.database, config.as_ref());
    config::ensure_db_dir(&db_path)?;

    let mut store = SqliteStore::open(&db_path)?;
    let stats = store.stats()?;
    tracing::debug!(
        products = stats.products,
        purchases = stats.purchases,
        "store opened"
    );
    ui::status(Icons::DATABASE, "Database", &db_path.display().to_string());

    let stdin = io::stdin();
    shell::run(&mut store, &mut stdin.lock())?;
    Ok(())
}
