//! Storage layer for budget-manager
//!
//! Two independent JSON artifacts, `users.json` and `transactions.json`,
//! each holding a full snapshot of its collection. Writes are atomic.

pub mod file_io;
pub mod transactions;
pub mod users;

pub use file_io::{write_json_atomic, FORMAT_VERSION};
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use std::fmt;

use tracing::error;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Outcome of loading one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// File read successfully, with this many records
    Loaded(usize),
    /// File read, but some records could not be decoded and were dropped
    Partial { loaded: usize, skipped: usize },
    /// No file yet (first run)
    Missing,
    /// File unreadable or corrupt; collection left empty
    Recovered(String),
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(n) => write!(f, "loaded {} record(s)", n),
            Self::Partial { loaded, skipped } => write!(
                f,
                "loaded {} record(s), skipped {} unreadable record(s)",
                loaded, skipped
            ),
            Self::Missing => write!(f, "not found, a new file will be created"),
            Self::Recovered(reason) => write!(f, "could not be read ({}), starting empty", reason),
        }
    }
}

/// What `load_all` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub users: ArtifactStatus,
    pub transactions: ArtifactStatus,
}

impl LoadReport {
    /// True if either artifact lost data while loading
    pub fn has_recovery(&self) -> bool {
        [&self.users, &self.transactions].iter().any(|status| {
            matches!(
                status,
                ArtifactStatus::Recovered(_) | ArtifactStatus::Partial { .. }
            )
        })
    }
}

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: BudgetPaths,
    pub users: UserRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load both artifacts independently
    pub fn load_all(&self) -> Result<LoadReport, BudgetError> {
        Ok(LoadReport {
            users: self.users.load()?,
            transactions: self.transactions.load()?,
        })
    }

    /// Save both artifacts.
    ///
    /// The second artifact is still written if the first fails; the first
    /// failure is returned.
    pub fn save_all(&self) -> Result<(), BudgetError> {
        let users = self.users.save();
        if let Err(e) = &users {
            error!(error = %e, "error saving user data");
        }

        let transactions = self.transactions.save();
        if let Err(e) = &transactions {
            error!(error = %e, "error saving transaction data");
        }

        users.and(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionKind, User};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_partial_load_counts_as_recovery() {
        let report = LoadReport {
            users: ArtifactStatus::Loaded(1),
            transactions: ArtifactStatus::Partial {
                loaded: 2,
                skipped: 1,
            },
        };
        assert!(report.has_recovery());
        assert_eq!(
            report.transactions.to_string(),
            "loaded 2 record(s), skipped 1 unreadable record(s)"
        );
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, _storage) = create_storage();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_first_run_loads_two_empty_collections() {
        let (_temp_dir, storage) = create_storage();
        let report = storage.load_all().unwrap();

        assert_eq!(report.users, ArtifactStatus::Missing);
        assert_eq!(report.transactions, ArtifactStatus::Missing);
        assert!(!report.has_recovery());
        assert_eq!(storage.users.count().unwrap(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let (temp_dir, storage) = create_storage();
        storage.users.add(User::new("Ann", "Lee", "ann@x.com", "secret1")).unwrap();
        storage
            .transactions
            .append(Transaction::from_date_text(
                TransactionKind::Income,
                "Salary",
                Money::from_cents(100000),
                "2024-01-15",
            ))
            .unwrap();
        storage.save_all().unwrap();

        let reopened =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let report = reopened.load_all().unwrap();

        assert_eq!(report.users, ArtifactStatus::Loaded(1));
        assert_eq!(report.transactions, ArtifactStatus::Loaded(1));
        assert_eq!(
            reopened.users.find_by_identifier("ann@x.com").unwrap(),
            storage.users.find_by_identifier("ann@x.com").unwrap()
        );
        assert_eq!(
            reopened.transactions.get_all().unwrap(),
            storage.transactions.get_all().unwrap()
        );
    }

    #[test]
    fn test_artifacts_load_independently() {
        let (temp_dir, storage) = create_storage();
        storage.users.add(User::new("Ann", "Lee", "ann@x.com", "secret1")).unwrap();
        storage.save_all().unwrap();

        std::fs::write(storage.paths().transactions_file(), "garbage").unwrap();

        let reopened =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let report = reopened.load_all().unwrap();

        assert_eq!(report.users, ArtifactStatus::Loaded(1));
        assert!(matches!(report.transactions, ArtifactStatus::Recovered(_)));
        assert!(report.has_recovery());
    }

    #[test]
    fn test_save_all_attempts_both_artifacts() {
        let (_temp_dir, storage) = create_storage();

        // A directory where users.json should be makes that rename fail
        std::fs::create_dir_all(storage.paths().users_file()).unwrap();
        storage
            .transactions
            .append(Transaction::from_date_text(
                TransactionKind::Expense,
                "Rent",
                Money::from_cents(40000),
                "2024-01-20",
            ))
            .unwrap();

        assert!(storage.save_all().is_err());
        assert!(storage.paths().transactions_file().is_file());
    }
}
