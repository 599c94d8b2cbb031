//! JSON Export functionality
//!
//! Exports the transaction listing and summary with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::reports::{SummaryReport, TransactionListing, TransactionRow};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Transaction export document
#[derive(Debug, Clone, Serialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: SummaryReport,

    /// All transactions in insertion order
    pub transactions: Vec<TransactionRow>,
}

impl TransactionExport {
    /// Build the export document from storage
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        let listing = TransactionListing::generate(storage)?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: SummaryReport::generate(storage)?,
            transactions: listing.rows,
        })
    }
}

/// Export transactions and totals to JSON
pub fn export_transactions_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<usize> {
    let export = TransactionExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(export.transactions.len())
}
