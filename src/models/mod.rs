//! Core data models for budget-manager
//!
//! Users, transactions and the money type they share.

pub mod money;
pub mod transaction;
pub mod user;

pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
