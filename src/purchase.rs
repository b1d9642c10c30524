//! Ledger rows and transaction id derivation

use chrono::NaiveDateTime;

/// Second-precision base for transaction ids
const TXN_ID_FORMAT: &str = "txn%Y%m%d%H%M%S";

/// Ledger timestamps carry sub-second precision, finer than the id
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// An immutable entry in the purchase ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub transaction_id: String,
    /// Name of the product sold; references the catalog by name
    pub name: String,
    pub quantity: i64,
    /// Unit price at sale time times quantity. The unit price itself is
    /// not stored on the ledger.
    pub total_price: f64,
    /// ISO-8601 sale time
    pub timestamp: String,
}

/// Transaction id base for a sale at `at`. Sales landing in the same
/// second share a base; the ledger appends a numeric suffix to keep the
/// primary key unique.
pub fn transaction_id_base(at: NaiveDateTime) -> String {
    at.format(TXN_ID_FORMAT).to_string()
}

/// Ledger timestamp for a sale at `at`
pub fn ledger_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_micro_opt(12, 34, 56, 123_456)
            .unwrap()
    }

    #[test]
    fn test_transaction_id_base_format() {
        assert_eq!(transaction_id_base(sample_instant()), "txn20260805123456");
    }

    #[test]
    fn test_ledger_timestamp_is_finer_than_id() {
        let ts = ledger_timestamp(sample_instant());
        assert_eq!(ts, "2026-08-05T12:34:56.123456");
    }
}
