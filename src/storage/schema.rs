//! Database schema definitions

/// SQL to create the catalog table
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Products (
    name TEXT PRIMARY KEY,
    price REAL NOT NULL,
    quantity INTEGER NOT NULL
)
"#;

/// SQL to create the ledger table
///
/// The foreign key is declarative; existence of the product is checked by
/// lookup before insert rather than enforced by the engine.
pub const CREATE_PURCHASES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Purchases (
    transaction_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    total_price REAL NOT NULL,
    timestamp TEXT NOT NULL,
    FOREIGN KEY (name) REFERENCES Products(name)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_purchases_name ON Purchases(name)",
];

/// All schema creation statements, idempotent and safe on every startup
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_PRODUCTS_TABLE, CREATE_PURCHASES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
