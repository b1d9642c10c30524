//! Purchase operations: stock-checked sales and the purchase history

use chrono::{Local, NaiveDateTime};

use crate::storage::SqliteStore;
use crate::{Purchase, Result, purchase};

/// Outcome of a purchase attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// Sale recorded; carries the ledger row as written
    Completed(Purchase),
    NotFound,
    InsufficientStock { available: i64 },
    /// Zero or negative request, rejected before any lookup
    NonPositiveQuantity,
}

/// Purchase operations over a borrowed store handle
///
/// Needs a mutable borrow because recording a sale runs the catalog
/// decrement and the ledger append inside one database transaction.
pub struct Ledger<'a> {
    store: &'a mut SqliteStore,
}

impl<'a> Ledger<'a> {
    pub fn new(store: &'a mut SqliteStore) -> Self {
        Self { store }
    }

    /// Sell `quantity` units of `name`
    ///
    /// Checks existence and stock, then decrements the catalog row and
    /// appends the ledger row atomically. Rejections leave both tables
    /// unchanged and never consume a transaction id.
    pub fn purchase(&mut self, name: &str, quantity: i64) -> Result<PurchaseOutcome> {
        self.purchase_at(name, quantity, Local::now().naive_local())
    }

    fn purchase_at(
        &mut self,
        name: &str,
        quantity: i64,
        at: NaiveDateTime,
    ) -> Result<PurchaseOutcome> {
        if quantity <= 0 {
            return Ok(PurchaseOutcome::NonPositiveQuantity);
        }

        let product = match self.store.get_product(name)? {
            Some(product) => product,
            None => return Ok(PurchaseOutcome::NotFound),
        };

        if product.quantity < quantity {
            return Ok(PurchaseOutcome::InsufficientStock {
                available: product.quantity,
            });
        }

        let record = Purchase {
            transaction_id: self.next_transaction_id(at)?,
            name: product.name,
            quantity,
            total_price: product.price * quantity as f64,
            timestamp: purchase::ledger_timestamp(at),
        };
        self.store.record_sale(&record)?;

        tracing::debug!(transaction_id = %record.transaction_id, "sale recorded");
        Ok(PurchaseOutcome::Completed(record))
    }

    /// Ids are second-precision; sales landing in the same second get a
    /// numeric suffix so the ledger's primary key stays unique
    fn next_transaction_id(&self, at: NaiveDateTime) -> Result<String> {
        let base = purchase::transaction_id_base(at);
        let taken = self.store.count_purchases_with_base(&base)?;
        if taken == 0 {
            Ok(base)
        } else {
            Ok(format!("{base}-{taken}"))
        }
    }

    /// All ledger rows, store-defined order
    pub fn history(&self) -> Result<Vec<Purchase>> {
        self.store.list_purchases()
    }
}
