//! CLI command handlers
//!
//! The interactive menu shell and the one-shot subcommands, bridging clap
//! argument parsing with the command API.

pub mod export;
pub mod shell;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use shell::Shell;
