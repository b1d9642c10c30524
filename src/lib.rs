//! # Stockroom - Single-user inventory tracker
//!
//! Stockroom keeps a catalog of named products and an append-only purchase
//! ledger in a local SQLite database, driven from an interactive text menu.
//!
//! Stockroom provides:
//! - SQLite-backed storage for the catalog and the ledger
//! - Catalog operations: add products, adjust stock, list stock
//! - Purchase operations: stock-checked sales recorded atomically
//! - An interactive shell that renders outcomes as status lines and tables

pub mod catalog;
pub mod config;
pub mod ledger;
pub mod product;
pub mod purchase;
pub mod shell;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use catalog::{AddOutcome, AdjustOutcome, Catalog};
pub use ledger::{Ledger, PurchaseOutcome};
pub use product::Product;
pub use purchase::Purchase;
pub use storage::SqliteStore;

/// Result type alias for stockroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stockroom operations
///
/// Business-rule rejections (duplicate name, missing product, insufficient
/// stock) are not errors; they are outcome values returned by the catalog
/// and ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
