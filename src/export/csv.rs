//! CSV Export functionality
//!
//! Exports the transaction log to CSV format.

use std::io::Write;

use crate::error::BudgetResult;
use crate::reports::TransactionListing;
use crate::storage::Storage;

/// Export all transactions to CSV, one record per entry in insertion order
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> BudgetResult<usize> {
    let listing = TransactionListing::generate(storage)?;
    let mut wtr = ::csv::Writer::from_writer(writer);

    wtr.write_record(["Type", "Category", "Amount", "Date"])?;
    for row in &listing.rows {
        // Undated entries export an empty Date cell
        let date = row
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        wtr.write_record([
            row.kind.as_str(),
            row.category.as_str(),
            row.amount.to_decimal_string().as_str(),
            date.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(listing.rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_export_transactions_csv() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        for (kind, category, cents, date) in [
            (TransactionKind::Income, "Salary", 100000, "2024-01-15"),
            (TransactionKind::Expense, "Rent, flat 2", 40000, "2024-01-20"),
            (TransactionKind::Expense, "Gift", 1999, "bad-date"),
        ] {
            storage
                .transactions
                .append(Transaction::from_date_text(
                    kind,
                    category,
                    Money::from_cents(cents),
                    date,
                ))
                .unwrap();
        }

        let mut buffer = Vec::new();
        let count = export_transactions_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(count, 3);
        assert_eq!(lines[0], "Type,Category,Amount,Date");
        assert_eq!(lines[1], "income,Salary,1000.00,2024-01-15");
        assert_eq!(lines[2], "expense,\"Rent, flat 2\",400.00,2024-01-20");
        assert_eq!(lines[3], "expense,Gift,19.99,");
    }

    #[test]
    fn test_export_empty_log_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let mut buffer = Vec::new();
        assert_eq!(export_transactions_csv(&storage, &mut buffer).unwrap(), 0);
        assert_eq!(String::from_utf8(buffer).unwrap(), "Type,Category,Amount,Date\n");
    }
}
