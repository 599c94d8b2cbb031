//! Transaction model
//!
//! A single income or expense entry in the global transaction log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::BudgetError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind label, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("income") {
            Some(Self::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Some(Self::Expense)
        } else {
            None
        }
    }

    /// Stored label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            BudgetError::Validation(format!(
                "Invalid transaction type: '{}'. Valid types: income, expense",
                s
            ))
        })
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category label, may be empty
    pub category: String,

    /// Amount; the sign is not checked
    pub amount: Money,

    /// Calendar date, `None` when the entered text did not parse
    pub date: Option<NaiveDate>,
}

impl Transaction {
    /// Create a new transaction with a known date
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date: Some(date),
        }
    }

    /// Build a transaction from raw date text.
    ///
    /// An unparseable date does not prevent construction; the entry is kept
    /// with `date == None`.
    pub fn from_date_text(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date_text: &str,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date: parse_date(date_text),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if the date was recorded
    pub fn has_valid_date(&self) -> bool {
        self.date.is_some()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | ", self.kind, self.category, self.amount)?;
        match self.date {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "-"),
        }
    }
}

/// Parse an ISO 8601 calendar date (YYYY-MM-DD). Surrounding whitespace is
/// not accepted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_parse_ignores_case() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("INCOME"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse(" expense "), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }

    #[test]
    fn test_kind_from_str_error() {
        let err = "refund".parse::<TransactionKind>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        let kind: TransactionKind = serde_json::from_str("\"EXPENSE\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
        assert!(serde_json::from_str::<TransactionKind>("\"gift\"").is_err());
    }

    #[test]
    fn test_from_date_text_valid() {
        let txn = Transaction::from_date_text(
            TransactionKind::Income,
            "Salary",
            Money::from_cents(100000),
            "2024-01-15",
        );
        assert_eq!(txn.date, Some(date(2024, 1, 15)));
        assert!(txn.is_income());
        assert!(txn.has_valid_date());
    }

    #[test]
    fn test_from_date_text_invalid_keeps_entry() {
        let txn = Transaction::from_date_text(
            TransactionKind::Expense,
            "Rent",
            Money::from_cents(40000),
            "2024-02-30",
        );
        assert!(txn.date.is_none());
        assert!(txn.is_expense());
        assert_eq!(txn.amount.cents(), 40000);

        assert!(parse_date("15/01/2024").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date(" 2024-01-15 ").is_none());
        assert!(parse_date("2024-01-15\n").is_none());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            "Rent",
            Money::from_cents(40000),
            date(2024, 1, 20),
        );
        assert_eq!(txn.to_string(), "expense | Rent | $400.00 | 2024-01-20");

        let undated = Transaction::from_date_text(
            TransactionKind::Income,
            "Gift",
            Money::from_cents(500),
            "yesterday",
        );
        assert_eq!(undated.to_string(), "income | Gift | $5.00 | -");
    }

    #[test]
    fn test_serialization_with_missing_date() {
        let txn = Transaction::from_date_text(
            TransactionKind::Income,
            "Gift",
            Money::from_cents(500),
            "not a date",
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":null"));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
