//! budget-manager - single-user personal finance tracker
//!
//! Registers account holders, authenticates them, records income and
//! expense transactions and reports aggregate totals. Data lives in two
//! independent JSON files, one for users and one for transactions.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `crypto`: Password digests and zero-on-drop secrets
//! - `models`: Users, transactions and money
//! - `storage`: JSON file storage layer
//! - `services`: Business logic and the explicit login session
//! - `manager`: The command API the shell calls
//! - `reports`, `display`, `export`: Totals, listings and their renderings
//! - `cli`: Interactive menu shell and export command
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_manager::config::BudgetPaths;
//! use budget_manager::manager::BudgetManager;
//! use budget_manager::models::{Money, TransactionKind};
//!
//! # fn main() -> Result<(), budget_manager::BudgetError> {
//! let mut manager = BudgetManager::open(BudgetPaths::new()?)?;
//! manager.register_user("Ann", "Lee", "ann@x.com", "secret1")?;
//! if manager.login("ann@x.com", "secret1")? {
//!     manager.add_transaction(TransactionKind::Income, "Salary", Money::from_cents(100000), "2024-01-15")?;
//! }
//! println!("{}", manager.summary()?.format_terminal("$"));
//! manager.save_all()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod manager;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use manager::BudgetManager;
