//! Reports module for budget-manager
//!
//! Aggregate totals over the transaction log and the per-entry listing.

pub mod listing;
pub mod summary;

pub use listing::{TransactionListing, TransactionRow};
pub use summary::SummaryReport;
