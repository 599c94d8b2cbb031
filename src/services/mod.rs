//! Business logic layer for budget-manager
//!
//! Services borrow the [`Storage`](crate::storage::Storage) and implement the
//! operations the command API exposes. Authorization state lives in an
//! explicit [`Session`] value rather than in storage.

pub mod session;
pub mod transaction;
pub mod user;

pub use session::Session;
pub use transaction::{CreateTransactionInput, Totals, TransactionService};
pub use user::UserService;
