//! Transaction repository for JSON storage
//!
//! Manages loading and saving the append-only transaction log to
//! transactions.json

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::BudgetError;
use crate::models::Transaction;

use super::file_io::{
    check_format_version, default_format_version, read_json_optional, write_json_atomic,
};
use super::ArtifactStatus;

/// Serializable transaction data structure
#[derive(Debug, Clone, Serialize)]
struct TransactionData {
    version: u32,
    transactions: Vec<Transaction>,
}

/// On-disk shape as read back; entries are decoded one at a time so a single
/// bad record does not discard the rest of the log
#[derive(Debug, Deserialize)]
struct StoredTransactionData {
    #[serde(default = "default_format_version")]
    version: u32,
    transactions: Vec<serde_json::Value>,
}

/// Repository for the transaction log, kept in insertion order
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing artifact
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load transactions from disk.
    ///
    /// Missing and unreadable files both leave the log empty; the latter is
    /// reported as [`ArtifactStatus::Recovered`]. Individual entries that do
    /// not decode are skipped and reported as [`ArtifactStatus::Partial`].
    pub fn load(&self) -> Result<ArtifactStatus, BudgetError> {
        let (transactions, status) = match self.read_artifact() {
            Ok(Some((transactions, 0))) => {
                let count = transactions.len();
                (transactions, ArtifactStatus::Loaded(count))
            }
            Ok(Some((transactions, skipped))) => {
                let loaded = transactions.len();
                (transactions, ArtifactStatus::Partial { loaded, skipped })
            }
            Ok(None) => {
                info!(path = %self.path.display(), "transaction data file not found, starting empty");
                (Vec::new(), ArtifactStatus::Missing)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load transaction data, starting empty");
                (Vec::new(), ArtifactStatus::Recovered(e.to_string()))
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = transactions;

        debug!(count = data.len(), "loaded transactions");
        Ok(status)
    }

    /// Decoded entries plus the number skipped
    fn read_artifact(&self) -> Result<Option<(Vec<Transaction>, usize)>, BudgetError> {
        let Some(file_data) = read_json_optional::<StoredTransactionData, _>(&self.path)? else {
            return Ok(None);
        };
        check_format_version(&self.path, file_data.version)?;

        let mut transactions = Vec::with_capacity(file_data.transactions.len());
        let mut skipped = 0;
        for (index, raw) in file_data.transactions.into_iter().enumerate() {
            match serde_json::from_value::<Transaction>(raw) {
                Ok(txn) => transactions.push(txn),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "skipping unreadable transaction");
                    skipped += 1;
                }
            }
        }

        Ok(Some((transactions, skipped)))
    }

    /// Save the whole log to disk, replacing the previous snapshot
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            version: default_format_version(),
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;

        debug!(count = data.len(), path = %self.path.display(), "saved transactions");
        Ok(())
    }

    /// Append a transaction to the end of the log
    pub fn append(&self, txn: Transaction) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(txn);
        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(category: &str, cents: i64, day: u32) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            category,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.load().unwrap(), ArtifactStatus::Missing);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();

        // Dates deliberately out of order: the log is not sorted
        repo.append(expense("Rent", 100, 20)).unwrap();
        repo.append(expense("Food", 200, 5)).unwrap();
        repo.append(expense("Bus", 300, 12)).unwrap();

        let categories: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(categories, vec!["Rent", "Food", "Bus"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(expense("Rent", -5000, 15)).unwrap();
        repo.append(Transaction::from_date_text(
            TransactionKind::Income,
            "Gift",
            Money::from_cents(700),
            "someday",
        ))
        .unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        assert_eq!(repo2.load().unwrap(), ArtifactStatus::Loaded(2));
        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_save_format_is_versioned_json() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(expense("Rent", 40000, 20)).unwrap();
        repo.save().unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["transactions"][0]["kind"], "expense");
        assert_eq!(value["transactions"][0]["amount"], 40000);
        assert_eq!(value["transactions"][0]["date"], "2025-01-20");
    }

    #[test]
    fn test_unversioned_file_is_accepted() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r#"{"transactions":[{"kind":"Income","category":"Salary","amount":100000,"date":"2024-01-15"}]}"#,
        )
        .unwrap();

        assert_eq!(repo.load().unwrap(), ArtifactStatus::Loaded(1));
        assert!(repo.get_all().unwrap()[0].is_income());
    }

    #[test]
    fn test_unknown_kind_skips_only_that_entry() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r#"{"version":1,"transactions":[
                {"kind":"income","category":"Salary","amount":100000,"date":"2024-01-15"},
                {"kind":"transfer","category":"Savings","amount":5000,"date":"2024-01-16"},
                {"kind":"expense","category":"Rent","amount":40000,"date":null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            repo.load().unwrap(),
            ArtifactStatus::Partial {
                loaded: 2,
                skipped: 1
            }
        );
        let categories: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(categories, vec!["Salary", "Rent"]);
    }

    #[test]
    fn test_corrupt_file_recovers_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("transactions.json"), [0xde, 0xad, 0xbe, 0xef]).unwrap();

        assert!(matches!(repo.load().unwrap(), ArtifactStatus::Recovered(_)));
        assert_eq!(repo.count().unwrap(), 0);
    }
}
