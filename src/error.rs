//! Custom error types for budget-manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget-manager operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad operator input (amount, date or kind text)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login failed. Deliberately does not say which factor was wrong.
    #[error("Invalid phone/email or password")]
    Auth,

    /// A mutation was attempted while nobody is logged in
    #[error("Please log in first")]
    NoActiveSession,

    /// Password hashing contract broken (malformed stored digest)
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Check if this is a missing-session refusal
    pub fn is_no_session(&self) -> bool {
        matches!(self, Self::NoActiveSession)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget-manager operations
pub type BudgetResult<T> = Result<T, BudgetError>;
