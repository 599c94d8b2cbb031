//! Interactive menu shell
//!
//! Reads operator input, re-prompts on malformed numbers and dates, and
//! dispatches to the [`BudgetManager`] command API. Errors from a single
//! command are printed and the loop continues.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::crypto::SecureString;
use crate::error::{BudgetError, BudgetResult};
use crate::manager::BudgetManager;
use crate::models::transaction::parse_date;
use crate::models::{Money, MoneyParseError, TransactionKind};
use crate::reports::TransactionListing;
use crate::storage::{ArtifactStatus, LoadReport};

const MENU: &str = "\
1. Register
2. Login
3. Add Income
4. Add Expense
5. View Summary
6. View Transactions
7. Exit
8. Save
9. Logout";

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven shell over any line reader and writer
pub struct Shell<'m, R, W> {
    manager: &'m mut BudgetManager,
    input: R,
    output: W,
    currency_symbol: String,
    autosave_on_exit: bool,
    hide_passwords: bool,
}

impl<'m, R: BufRead, W: Write> Shell<'m, R, W> {
    /// Create a shell. Passwords are echoed unless [`Shell::hide_passwords`]
    /// is enabled.
    pub fn new(manager: &'m mut BudgetManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
            currency_symbol: "$".to_string(),
            autosave_on_exit: true,
            hide_passwords: false,
        }
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn autosave_on_exit(mut self, enabled: bool) -> Self {
        self.autosave_on_exit = enabled;
        self
    }

    /// Read passwords from the terminal without echo
    pub fn hide_passwords(mut self, enabled: bool) -> Self {
        self.hide_passwords = enabled;
        self
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        let report = self.manager.load_report().clone();
        self.print_load_report(&report)?;

        loop {
            writeln!(self.output, "{}", MENU)?;

            let Some(choice) = self.read_choice()? else {
                return self.exit();
            };

            debug!(choice, "menu choice");
            let flow = match self.dispatch(choice) {
                Ok(flow) => flow,
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return self.exit();
            }
        }
    }

    fn dispatch(&mut self, choice: u32) -> BudgetResult<Flow> {
        match choice {
            1 => self.register(),
            2 => self.login(),
            3 => self.add_transaction(TransactionKind::Income),
            4 => self.add_transaction(TransactionKind::Expense),
            5 => {
                let summary = self.manager.summary()?;
                write!(self.output, "{}", summary.format_terminal(&self.currency_symbol))?;
                Ok(Flow::Continue)
            }
            6 => {
                let listing = TransactionListing {
                    rows: self.manager.list_transactions()?,
                };
                write!(self.output, "{}", listing.format_terminal(&self.currency_symbol))?;
                Ok(Flow::Continue)
            }
            7 => Ok(Flow::Exit),
            8 => {
                self.manager.save_all()?;
                writeln!(self.output, "Data saved.")?;
                Ok(Flow::Continue)
            }
            9 => {
                match self.manager.current_user() {
                    Some(user) => {
                        let name = user.full_name();
                        self.manager.logout();
                        writeln!(self.output, "Logged out {}.", name)?;
                    }
                    None => writeln!(self.output, "Nobody is logged in.")?,
                }
                Ok(Flow::Continue)
            }
            _ => {
                writeln!(self.output, "Invalid choice! Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn register(&mut self) -> BudgetResult<Flow> {
        let Some(first_name) = self.prompt("Enter first name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(last_name) = self.prompt("Enter last name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(identifier) = self.prompt("Enter phone/email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(password) = self.prompt_password("Enter password: ")? else {
            return Ok(Flow::Exit);
        };

        let user = self
            .manager
            .register_user(&first_name, &last_name, &identifier, &password)?;
        writeln!(self.output, "User registered successfully: {}", user)?;
        Ok(Flow::Continue)
    }

    fn login(&mut self) -> BudgetResult<Flow> {
        let Some(identifier) = self.prompt("Enter phone/email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(password) = self.prompt_password("Enter password: ")? else {
            return Ok(Flow::Exit);
        };

        if self.manager.login(&identifier, &password)? {
            writeln!(self.output, "Login successful!")?;
        } else {
            writeln!(self.output, "{}.", BudgetError::Auth)?;
        }
        Ok(Flow::Continue)
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> BudgetResult<Flow> {
        // Refuse up front rather than after collecting every field
        if self.manager.current_user().is_none() {
            writeln!(self.output, "{}.", BudgetError::NoActiveSession)?;
            return Ok(Flow::Continue);
        }

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };

        let amount = loop {
            let Some(text) = self.prompt("Enter amount: ")? else {
                return Ok(Flow::Exit);
            };
            match Money::parse(&text) {
                Ok(amount) => break amount,
                Err(MoneyParseError::TooPrecise(_)) => writeln!(
                    self.output,
                    "Invalid input! Amounts can have at most two decimal places."
                )?,
                Err(MoneyParseError::InvalidFormat(_)) => writeln!(
                    self.output,
                    "Invalid input! Please enter a valid number for amount."
                )?,
            }
        };

        let date_text = loop {
            let Some(text) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
                return Ok(Flow::Exit);
            };
            if parse_date(&text).is_some() {
                break text;
            }
            writeln!(self.output, "Invalid date format, please use YYYY-MM-DD.")?;
        };

        let txn = self
            .manager
            .add_transaction(kind, &category, amount, &date_text)?;
        writeln!(self.output, "Transaction added: {}", txn)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> BudgetResult<()> {
        if self.autosave_on_exit {
            match self.manager.save_all() {
                Ok(()) => writeln!(self.output, "Data saved.")?,
                Err(e) => writeln!(self.output, "Error saving data: {}", e)?,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn print_load_report(&mut self, report: &LoadReport) -> BudgetResult<()> {
        for (label, status) in [("User", &report.users), ("Transaction", &report.transactions)] {
            match status {
                ArtifactStatus::Loaded(_) => {}
                ArtifactStatus::Partial { skipped, .. } => writeln!(
                    self.output,
                    "Warning: skipped {} unreadable {} record(s).",
                    skipped,
                    label.to_lowercase()
                )?,
                ArtifactStatus::Missing => writeln!(
                    self.output,
                    "{} data file not found. A new file will be created.",
                    label
                )?,
                ArtifactStatus::Recovered(reason) => writeln!(
                    self.output,
                    "Error loading {} data: {}",
                    label.to_lowercase(),
                    reason
                )?,
            }
        }
        Ok(())
    }

    /// Keep asking until the operator enters a number; `None` at end of input
    fn read_choice(&mut self) -> BudgetResult<Option<u32>> {
        loop {
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    /// Print a prompt and read one line without its terminator
    fn prompt(&mut self, label: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_password(&mut self, label: &str) -> BudgetResult<Option<SecureString>> {
        if self.hide_passwords {
            self.output.flush()?;
            let password = rpassword::prompt_password(label)
                .map_err(|e| BudgetError::Io(format!("Failed to read password: {}", e)))?;
            return Ok(Some(SecureString::from(password)));
        }

        Ok(self.prompt(label)?.map(SecureString::from))
    }
}
