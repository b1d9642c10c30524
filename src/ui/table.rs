use tabled::{Table, Tabled, settings::Style};

use crate::ui::money;
use crate::{Product, Purchase};

#[derive(Tabled)]
struct StockRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "On Hand")]
    quantity: i64,
}

/// Render the catalog as a table, rows in store order
pub fn stock_table(products: &[Product]) -> String {
    let rows: Vec<StockRow> = products
        .iter()
        .map(|product| StockRow {
            name: product.name.clone(),
            price: money(product.price),
            quantity: product.quantity,
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Transaction")]
    transaction_id: String,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
}

/// Render the purchase ledger as a table, rows in store order
pub fn history_table(purchases: &[Purchase]) -> String {
    let rows: Vec<HistoryRow> = purchases
        .iter()
        .map(|purchase| HistoryRow {
            transaction_id: purchase.transaction_id.clone(),
            name: purchase.name.clone(),
            quantity: purchase.quantity,
            total: money(purchase.total_price),
            timestamp: purchase.timestamp.clone(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
