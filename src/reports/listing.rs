//! Transaction listing
//!
//! One rendered row per transaction, in insertion order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::transaction::format_transaction_register;
use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind};
use crate::services::TransactionService;
use crate::storage::Storage;

/// A single listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub date: Option<NaiveDate>,
}

impl TransactionRow {
    /// Date as YYYY-MM-DD, or "-" when the entry has none
    pub fn date_display(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl From<Transaction> for TransactionRow {
    fn from(txn: Transaction) -> Self {
        Self {
            kind: txn.kind,
            category: txn.category,
            amount: txn.amount,
            date: txn.date,
        }
    }
}

/// All transactions as rows
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionListing {
    pub rows: Vec<TransactionRow>,
}

impl TransactionListing {
    /// Generate the listing from current storage contents
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let rows = TransactionService::new(storage)
            .list()?
            .into_iter()
            .map(TransactionRow::from)
            .collect();

        Ok(Self { rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the listing for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        format_transaction_register(&self.rows, currency_symbol)
    }
}
