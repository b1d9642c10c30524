//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - Products(name, price, quantity)
//! - Purchases(transaction_id, name, quantity, total_price, timestamp)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats};
