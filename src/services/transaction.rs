//! Transaction service
//!
//! Appends to the global transaction log (gated on an active session) and
//! computes income/expense totals.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

use super::session::Session;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    /// Raw ISO date text; stored as an undated entry if it does not parse
    pub date_text: String,
}

/// Income and expense sums over the whole log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    /// income - expense
    pub fn balance(&self) -> BudgetResult<Money> {
        self.income
            .checked_sub(self.expense)
            .ok_or_else(|| out_of_range("balance"))
    }
}

fn out_of_range(what: &str) -> BudgetError {
    BudgetError::Validation(format!("{} is too large to represent", what))
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction.
    ///
    /// Fails with `NoActiveSession` before touching the log when nobody is
    /// logged in. The entry is not linked to the logged-in user.
    pub fn create(
        &self,
        session: &Session,
        input: CreateTransactionInput,
    ) -> BudgetResult<Transaction> {
        let user = session.require()?;

        let txn = Transaction::from_date_text(
            input.kind,
            input.category,
            input.amount,
            &input.date_text,
        );

        if !txn.has_valid_date() {
            warn!(
                date = %input.date_text,
                "invalid date format, expected YYYY-MM-DD; transaction stored without a date"
            );
        }

        self.storage.transactions.append(txn.clone())?;

        info!(by = %user.identifier, transaction = %txn, "transaction added");
        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> BudgetResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Sum amounts by kind
    pub fn totals(&self) -> BudgetResult<Totals> {
        let mut totals = Totals::default();
        for txn in self.storage.transactions.get_all()? {
            match txn.kind {
                TransactionKind::Income => {
                    totals.income = totals
                        .income
                        .checked_add(txn.amount)
                        .ok_or_else(|| out_of_range("total income"))?;
                }
                TransactionKind::Expense => {
                    totals.expense = totals
                        .expense
                        .checked_add(txn.amount)
                        .ok_or_else(|| out_of_range("total expense"))?;
                }
            }
        }
        Ok(totals)
    }
}
