use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_manager::cli::{handle_export_command, ExportArgs, Shell};
use budget_manager::config::{paths::BudgetPaths, settings::Settings};
use budget_manager::manager::BudgetManager;
use budget_manager::reports::TransactionListing;

/// Environment variable holding a tracing filter, overriding the settings file
const LOG_ENV: &str = "BUDGET_LOG";

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Single-user personal finance tracker",
    long_about = "budget-manager records income and expense transactions for \
                  registered users and reports running totals. Run without a \
                  subcommand to open the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "repl")]
    Shell,

    /// Print total income, total expense and balance
    Summary,

    /// List every recorded transaction
    List,

    /// Export transactions to CSV or JSON
    Export(ExportArgs),

    /// Create the data directory and write a default config.json
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut manager = BudgetManager::open(paths.clone())?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let hide_passwords = stdin.is_terminal();
            Shell::new(&mut manager, stdin.lock(), std::io::stdout())
                .currency_symbol(settings.currency_symbol.clone())
                .autosave_on_exit(settings.autosave_on_exit)
                .hide_passwords(hide_passwords)
                .run()?;
        }
        Commands::Summary => {
            let report = manager.summary()?;
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        Commands::List => {
            let listing = TransactionListing::generate(manager.storage())?;
            print!("{}", listing.format_terminal(&settings.currency_symbol));
        }
        Commands::Export(args) => {
            handle_export_command(manager.storage(), args)?;
        }
        Commands::Init => {
            if paths.settings_file().exists() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
            println!("Data directory: {}", paths.data_dir().display());
        }
        Commands::Config => {
            print_config(&paths, &settings);
            println!();
            println!("Records:");
            println!("  Users:            {}", manager.storage().users.count()?);
            println!("  Transactions:     {}", manager.storage().transactions.count()?);
        }
    }

    Ok(())
}

fn print_config(paths: &BudgetPaths, settings: &Settings) {
    println!("Budget Manager Configuration");
    println!("============================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Users file:        {}", paths.users_file().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!();
    println!("Settings:");
    println!("  Schema version:   {}", settings.schema_version);
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Log level:        {}", settings.log_level);
    println!("  Autosave on exit: {}", settings.autosave_on_exit);
}
