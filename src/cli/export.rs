//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_transactions_csv, export_transactions_json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per transaction
    Csv,
    /// JSON document with transactions and totals
    Json,
}

/// Arguments for `budget export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> BudgetResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            let count = write_export(storage, &mut writer, args.format, args.pretty)?;
            writer.flush()?;
            println!("Exported {} transactions to: {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &mut writer, args.format, args.pretty)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> BudgetResult<usize> {
    match format {
        ExportFormat::Csv => export_transactions_csv(storage, writer),
        ExportFormat::Json => export_transactions_json(storage, writer, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage
            .transactions
            .append(Transaction::from_date_text(
                TransactionKind::Expense,
                "Rent",
                Money::from_cents(40000),
                "2024-01-20",
            ))
            .unwrap();

        let output = temp_dir.path().join("out.csv");
        handle_export_command(
            &storage,
            ExportArgs {
                format: ExportFormat::Csv,
                output: Some(output.clone()),
                pretty: false,
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("expense,Rent,400.00,2024-01-20"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let err = handle_export_command(
            &storage,
            ExportArgs {
                format: ExportFormat::Json,
                output: Some(temp_dir.path().join("missing").join("out.json")),
                pretty: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
