//! CLI commands for data export

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::services::ExpenseTracker;

use super::report::create_output;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (expenses plus metadata)
    Json,
    /// YAML format (expenses plus metadata, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`
pub fn handle_export_command(tracker: &ExpenseTracker, args: ExportArgs) -> ExpenseResult<()> {
    let expenses = tracker.ledger().records();
    let mut writer = create_output(&args.output)?;

    match args.format {
        ExportFormat::Csv => export_expenses_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_json(expenses, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses to: {}",
        expenses.len(),
        args.output.display()
    );
    Ok(())
}
