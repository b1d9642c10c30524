//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::product::Product;
use crate::purchase::Purchase;

/// SQLite-backed storage for the catalog and the purchase ledger
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Catalog Operations ==========

    /// Insert a new product; the name is the primary key
    pub fn insert_product(&self, product: &Product) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Products (name, price, quantity) VALUES (?1, ?2, ?3)",
            params![product.name, product.price, product.quantity],
        )?;
        Ok(())
    }

    /// Get a product by name
    pub fn get_product(&self, name: &str) -> Result<Option<Product>> {
        self.conn
            .query_row(
                "SELECT name, price, quantity FROM Products WHERE name = ?1",
                [name],
                row_to_product,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Apply a signed delta to a product's stock level
    ///
    /// Returns the number of rows matched; zero means the name is unknown.
    /// No lower bound is applied, so the resulting level may be negative.
    pub fn adjust_quantity(&self, name: &str, delta: i64) -> Result<usize> {
        let matched = self.conn.execute(
            "UPDATE Products SET quantity = quantity + ?1 WHERE name = ?2",
            params![delta, name],
        )?;
        Ok(matched)
    }

    /// All products, store-defined order
    pub fn list_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, price, quantity FROM Products")?;

        let products = stmt
            .query_map([], row_to_product)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(products)
    }

    /// Count all products
    pub fn count_products(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Ledger Operations ==========

    /// Insert a ledger row
    pub fn insert_purchase(&self, purchase: &Purchase) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO Purchases (transaction_id, name, quantity, total_price, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                purchase.transaction_id,
                purchase.name,
                purchase.quantity,
                purchase.total_price,
                purchase.timestamp,
            ],
        )?;
        Ok(())
    }

    /// Decrement the product's stock and append the ledger row in one
    /// transaction; a failure before commit rolls back both writes
    pub fn record_sale(&mut self, sale: &Purchase) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "UPDATE Products SET quantity = quantity - ?1 WHERE name = ?2",
            params![sale.quantity, sale.name],
        )?;
        tx.execute(
            r#"
            INSERT INTO Purchases (transaction_id, name, quantity, total_price, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                sale.transaction_id,
                sale.name,
                sale.quantity,
                sale.total_price,
                sale.timestamp,
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// All ledger rows, store-defined order
    pub fn list_purchases(&self) -> Result<Vec<Purchase>> {
        let mut stmt = self.conn.prepare(
            "SELECT transaction_id, name, quantity, total_price, timestamp FROM Purchases",
        )?;

        let purchases = stmt
            .query_map([], row_to_purchase)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(purchases)
    }

    /// Ledger rows for one product
    pub fn purchases_for(&self, name: &str) -> Result<Vec<Purchase>> {
        let mut stmt = self.conn.prepare(
            "SELECT transaction_id, name, quantity, total_price, timestamp FROM Purchases WHERE name = ?1",
        )?;

        let purchases = stmt
            .query_map([name], row_to_purchase)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(purchases)
    }

    /// Count ids sharing a second-precision base: the base itself plus any
    /// suffixed variants
    pub fn count_purchases_with_base(&self, base: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Purchases WHERE transaction_id = ?1 OR transaction_id LIKE ?1 || '-%'",
            [base],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Count all ledger rows
    pub fn count_purchases(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Purchases", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            products: self.count_products()?,
            purchases: self.count_purchases()?,
        })
    }
}

/// Helper to convert a row to a Product
fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        name: row.get(0)?,
        price: row.get(1)?,
        quantity: row.get(2)?,
    })
}

/// Helper to convert a row to a Purchase
fn row_to_purchase(row: &rusqlite::Row) -> rusqlite::Result<Purchase> {
    Ok(Purchase {
        transaction_id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        total_price: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

/// True when a statement failed on a uniqueness constraint (duplicate
/// primary key)
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    )
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub products: usize,
    pub purchases: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        writeln!(f, "  Products: {}", self.products)?;
        write!(f, "  Purchases: {}", self.purchases)
    }
}
