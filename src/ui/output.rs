use crate::ui::{Icons, theme};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Currency symbol used for every rendered price
const CURRENCY: &str = "₹";

pub fn header(text: &str) {
    println!();
    println!("{} {}", Icons::PACKAGE, text.style(theme().header.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    println!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    println!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn note(label: &str) {
    println!(
        "{} {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone())
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

/// Print a prompt without a trailing newline and flush so it shows before
/// the read
pub fn prompt(label: &str) {
    print!("{}", label.style(theme().dim.clone()));
    let _ = io::stdout().flush();
}

pub fn money(amount: f64) -> String {
    format!("{CURRENCY}{amount:.2}")
}
