//! Interactive menu shell
//!
//! One state, six transitions. The loop reads a menu choice, dispatches to
//! the catalog or ledger operations, renders the outcome and redisplays.
//! Malformed numeric input re-prompts instead of ending the session;
//! end-of-input terminates the loop the same way as the exit choice.

use std::io::BufRead;
use std::str::FromStr;

use crate::catalog::{AddOutcome, AdjustOutcome, Catalog};
use crate::ledger::{Ledger, PurchaseOutcome};
use crate::storage::SqliteStore;
use crate::ui::{self, Icons};
use crate::{Product, Result};

const MENU: &str = "\
1. Add Product
2. Modify Quantity
3. Make Purchase
4. Display Stock
5. Purchase History
6. Exit";

/// Run the menu loop over `input` until the user exits or input ends
pub fn run<R: BufRead>(store: &mut SqliteStore, input: &mut R) -> Result<()> {
    loop {
        ui::header("Inventory Management System");
        println!("{MENU}");

        let Some(choice) = read_line(input, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_product(store, input)?,
            "2" => modify_quantity(store, input)?,
            "3" => make_purchase(store, input)?,
            "4" => display_stock(store)?,
            "5" => purchase_history(store)?,
            "6" => {
                ui::note("Exiting...");
                break;
            }
            _ => ui::warn("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

fn add_product<R: BufRead>(store: &SqliteStore, input: &mut R) -> Result<()> {
    let Some(name) = read_line(input, "Enter product name: ")? else {
        return Ok(());
    };
    let Some(price) = read_parsed::<f64, R>(input, "Enter price: ")? else {
        return Ok(());
    };
    let Some(quantity) = read_parsed::<i64, R>(input, "Enter quantity: ")? else {
        return Ok(());
    };

    match Catalog::new(store).add(&Product::new(name.clone(), price, quantity))? {
        AddOutcome::Added => ui::success(&format!("Product '{name}' added.")),
        AddOutcome::DuplicateName => ui::warn(&format!("Product '{name}' already exists.")),
    }
    Ok(())
}

fn modify_quantity<R: BufRead>(store: &SqliteStore, input: &mut R) -> Result<()> {
    let Some(name) = read_line(input, "Enter product name: ")? else {
        return Ok(());
    };
    let Some(delta) =
        read_parsed::<i64, R>(input, "Enter quantity to add/subtract (+/-): ")?
    else {
        return Ok(());
    };

    match Catalog::new(store).adjust(&name, delta)? {
        AdjustOutcome::Adjusted { new_quantity } => {
            ui::success(&format!("Quantity for '{name}' is now {new_quantity}."));
        }
        AdjustOutcome::NotFound => ui::warn(&format!("Product '{name}' not found.")),
    }
    Ok(())
}

fn make_purchase<R: BufRead>(store: &mut SqliteStore, input: &mut R) -> Result<()> {
    let Some(name) = read_line(input, "Enter product name: ")? else {
        return Ok(());
    };
    let Some(quantity) = read_parsed::<i64, R>(input, "Enter quantity to purchase: ")? else {
        return Ok(());
    };

    match Ledger::new(store).purchase(&name, quantity)? {
        PurchaseOutcome::Completed(sale) => ui::success(&format!(
            "Purchase successful. {}x {} sold for {}.",
            sale.quantity,
            sale.name,
            ui::money(sale.total_price)
        )),
        PurchaseOutcome::NotFound => ui::warn(&format!("Product '{name}' not found.")),
        PurchaseOutcome::InsufficientStock { available } => ui::warn(&format!(
            "Insufficient stock for '{name}' ({available} available)."
        )),
        PurchaseOutcome::NonPositiveQuantity => {
            ui::warn("Purchase quantity must be positive.");
        }
    }
    Ok(())
}

fn display_stock(store: &SqliteStore) -> Result<()> {
    let products = Catalog::new(store).list()?;
    if products.is_empty() {
        ui::note("No products available.");
        return Ok(());
    }

    ui::section("Product Catalog");
    println!("{}", ui::stock_table(&products));
    Ok(())
}

fn purchase_history(store: &mut SqliteStore) -> Result<()> {
    let purchases = Ledger::new(store).history()?;
    if purchases.is_empty() {
        ui::note("No purchase history available.");
        return Ok(());
    }

    ui::section(&format!("{} Purchase History", Icons::LEDGER));
    println!("{}", ui::history_table(&purchases));
    Ok(())
}

/// Prompt and read one trimmed line. `None` when input is exhausted.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    ui::prompt(prompt);
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a numeric value, re-prompting until a line parses
fn read_parsed<T: FromStr, R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<T>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => ui::error(&format!("'{line}' is not a valid number, try again.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(store: &mut SqliteStore, session: &str) {
        let mut input = Cursor::new(session.as_bytes().to_vec());
        run(store, &mut input).unwrap();
    }

    #[test]
    fn test_exit_choice_ends_loop() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        scripted(&mut store, "6\n");
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        scripted(&mut store, "");
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        scripted(&mut store, "9\nbogus\n6\n");
    }

    #[test]
    fn test_add_product_via_menu() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        scripted(&mut store, "1\nWidget\n9.99\n10\n6\n");

        let product = store.get_product("Widget").unwrap().unwrap();
        assert!((product.price - 9.99).abs() < 1e-9);
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_malformed_number_reprompts() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        // Price takes two attempts, quantity one
        scripted(&mut store, "1\nWidget\nabc\n9.99\n10\n6\n");

        let product = store.get_product("Widget").unwrap().unwrap();
        assert!((product.price - 9.99).abs() < 1e-9);
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_full_session_purchase_flow() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        scripted(
            &mut store,
            "1\nWidget\n9.99\n10\n3\nWidget\n3\n4\n5\n6\n",
        );

        assert_eq!(store.get_product("Widget").unwrap().unwrap().quantity, 7);
        let purchases = store.list_purchases().unwrap();
        assert_eq!(purchases.len(), 1);
        assert!((purchases[0].total_price - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_end_of_input_mid_prompt_aborts_operation() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        // Input ends while the add flow is waiting for a price
        scripted(&mut store, "1\nWidget\n");

        assert!(store.get_product("Widget").unwrap().is_none());
    }
}
