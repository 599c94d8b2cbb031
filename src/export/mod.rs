//! Export module for budget-manager
//!
//! Writes the transaction log in spreadsheet-friendly CSV or as a JSON
//! document that also carries the summary totals.

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_transactions_json, TransactionExport, EXPORT_SCHEMA_VERSION};
