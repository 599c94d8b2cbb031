//! Transaction display formatting
//!
//! Renders listing rows as an aligned register.

use super::report::{separator, truncate};
use crate::reports::TransactionRow;

const CATEGORY_WIDTH: usize = 24;

/// Format a single transaction row
pub fn format_transaction_row(row: &TransactionRow, currency_symbol: &str) -> String {
    format!(
        "{:<8} | {:<width$} | {:>14} | {}",
        row.kind.as_str(),
        truncate(&row.category, CATEGORY_WIDTH),
        row.amount.format_with_symbol(currency_symbol),
        row.date_display(),
        width = CATEGORY_WIDTH
    )
}

/// Format a list of transaction rows as a register
pub fn format_transaction_register(rows: &[TransactionRow], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} | {:<width$} | {:>14} | {}\n",
        "Type",
        "Category",
        "Amount",
        "Date",
        width = CATEGORY_WIDTH
    ));
    output.push_str(&separator(64));
    output.push('\n');

    for row in rows {
        output.push_str(&format_transaction_row(row, currency_symbol));
        output.push('\n');
    }

    output
}
