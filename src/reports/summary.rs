//! Summary Report
//!
//! Total income, total expense and the resulting balance.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Income/expense summary over the whole log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub total_income: Money,
    pub total_expense: Money,
    /// total_income - total_expense
    pub balance: Money,
}

impl SummaryReport {
    /// Generate the summary from current storage contents
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let totals = TransactionService::new(storage).totals()?;

        Ok(Self {
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance()?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Income:   {:>15}\n",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>15}\n",
            self.total_expense.format_with_symbol(currency_symbol)
        ));
        output.push_str(&"-".repeat(31));
        output.push('\n');
        output.push_str(&format!(
            "Balance:        {:>15}\n",
            self.balance.format_with_symbol(currency_symbol)
        ));

        output
    }
}
