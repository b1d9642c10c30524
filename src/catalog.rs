//! Catalog operations: add products, adjust stock levels, list stock

use crate::storage::{SqliteStore, sqlite};
use crate::{Error, Product, Result};

/// Outcome of adding a product to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A product with the same name already exists; the store is unchanged
    DuplicateName,
}

/// Outcome of adjusting a product's stock level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustOutcome {
    Adjusted { new_quantity: i64 },
    NotFound,
}

/// Catalog operations over a borrowed store handle, scoped to one logical
/// operation at a time
pub struct Catalog<'a> {
    store: &'a SqliteStore,
}

impl<'a> Catalog<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Add a new product. Duplicate names are reported as an outcome, not
    /// an error; other storage failures propagate.
    pub fn add(&self, product: &Product) -> Result<AddOutcome> {
        match self.store.insert_product(product) {
            Ok(()) => {
                tracing::debug!(name = %product.name, "product added");
                Ok(AddOutcome::Added)
            }
            Err(Error::Storage(e)) if sqlite::is_unique_violation(&e) => {
                Ok(AddOutcome::DuplicateName)
            }
            Err(e) => Err(e),
        }
    }

    /// Apply a signed delta to a product's stock level in a single update.
    /// A sufficiently negative delta drives the level below zero; that is
    /// permitted and reported as-is.
    pub fn adjust(&self, name: &str, delta: i64) -> Result<AdjustOutcome> {
        if self.store.adjust_quantity(name, delta)? == 0 {
            return Ok(AdjustOutcome::NotFound);
        }

        // Read back the resulting level for reporting
        match self.store.get_product(name)? {
            Some(product) => Ok(AdjustOutcome::Adjusted {
                new_quantity: product.quantity,
            }),
            None => Ok(AdjustOutcome::NotFound),
        }
    }

    /// All products, store-defined order
    pub fn list(&self) -> Result<Vec<Product>> {
        self.store.list_products()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(products: &[Product]) -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        for product in products {
            store.insert_product(product).unwrap();
        }
        store
    }

    #[test]
    fn test_add_then_list() {
        let store = SqliteStore::open_in_memory().unwrap();
        let catalog = Catalog::new(&store);

        let outcome = catalog.add(&Product::new("Widget", 9.99, 10)).unwrap();
        assert_eq!(outcome, AddOutcome::Added);

        let products = catalog.list().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        assert!((products[0].price - 9.99).abs() < 1e-9);
        assert_eq!(products[0].quantity, 10);
    }

    #[test]
    fn test_duplicate_add_keeps_first_row() {
        let store = store_with(&[Product::new("Widget", 9.99, 10)]);
        let catalog = Catalog::new(&store);

        let outcome = catalog.add(&Product::new("Widget", 1.50, 99)).unwrap();
        assert_eq!(outcome, AddOutcome::DuplicateName);

        let products = catalog.list().unwrap();
        assert_eq!(products.len(), 1);
        assert!((products[0].price - 9.99).abs() < 1e-9);
        assert_eq!(products[0].quantity, 10);
    }

    #[test]
    fn test_adjust_is_additive() {
        let store = store_with(&[Product::new("Widget", 9.99, 10)]);
        let catalog = Catalog::new(&store);

        assert_eq!(
            catalog.adjust("Widget", 7).unwrap(),
            AdjustOutcome::Adjusted { new_quantity: 17 }
        );
        assert_eq!(
            catalog.adjust("Widget", -20).unwrap(),
            AdjustOutcome::Adjusted { new_quantity: -3 }
        );
    }

    #[test]
    fn test_adjust_missing_product_changes_nothing() {
        let store = store_with(&[Product::new("Widget", 9.99, 10)]);
        let catalog = Catalog::new(&store);

        assert_eq!(
            catalog.adjust("Gadget", 5).unwrap(),
            AdjustOutcome::NotFound
        );
        assert_eq!(store.get_product("Widget").unwrap().unwrap().quantity, 10);
    }
}
