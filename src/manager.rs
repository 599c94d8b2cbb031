//! Command API
//!
//! `BudgetManager` owns the storage and the session and exposes the handful
//! of operations the shell is allowed to call. Opening it loads both
//! artifacts; nothing is written until [`BudgetManager::save_all`].

use tracing::{info, warn};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind, User};
use crate::reports::{SummaryReport, TransactionListing, TransactionRow};
use crate::services::{CreateTransactionInput, Session, TransactionService, UserService};
use crate::storage::{LoadReport, Storage};

/// The core the command shell talks to
pub struct BudgetManager {
    storage: Storage,
    session: Session,
    load_report: LoadReport,
}

impl BudgetManager {
    /// Open storage at `paths` and load both artifacts
    pub fn open(paths: BudgetPaths) -> BudgetResult<Self> {
        let storage = Storage::new(paths)?;
        let load_report = storage.load_all()?;

        if load_report.has_recovery() {
            warn!(?load_report, "started with data recovered from unreadable files");
        } else {
            info!(?load_report, "data loaded");
        }

        Ok(Self {
            storage,
            session: Session::new(),
            load_report,
        })
    }

    /// What was found on disk at startup
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Register a new user
    pub fn register_user(
        &self,
        first_name: &str,
        last_name: &str,
        identifier: &str,
        password: &str,
    ) -> BudgetResult<User> {
        UserService::new(&self.storage).register(first_name, last_name, identifier, password)
    }

    /// Log in; returns false without touching the session on failure
    pub fn login(&mut self, identifier: &str, password: &str) -> BudgetResult<bool> {
        let users = UserService::new(&self.storage);
        self.session.login(&users, identifier, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Record a transaction; requires a logged-in user
    pub fn add_transaction(
        &self,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date_text: &str,
    ) -> BudgetResult<Transaction> {
        TransactionService::new(&self.storage).create(
            &self.session,
            CreateTransactionInput {
                kind,
                category: category.to_string(),
                amount,
                date_text: date_text.to_string(),
            },
        )
    }

    pub fn summary(&self) -> BudgetResult<SummaryReport> {
        SummaryReport::generate(&self.storage)
    }

    pub fn list_transactions(&self) -> BudgetResult<Vec<TransactionRow>> {
        Ok(TransactionListing::generate(&self.storage)?.rows)
    }

    /// Persist both collections
    pub fn save_all(&self) -> BudgetResult<()> {
        self.storage.save_all()?;
        info!("data saved");
        Ok(())
    }
}
