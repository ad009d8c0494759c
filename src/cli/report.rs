//! CLI commands for reports
//!
//! Prints the category and date reports, or writes them to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseTracker;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spent per category
    #[command(alias = "categories")]
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Total spent per date
    #[command(alias = "time")]
    Date {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    if tracker.ledger().is_empty() {
        println!("No expenses to report.");
        return Ok(());
    }

    match cmd {
        ReportCommands::Category { output } => {
            let report = tracker.report_by_category()?;
            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(settings)),
            }
        }
        ReportCommands::Date { output } => {
            let report = tracker.report_by_date()?;
            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Date report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(settings)),
            }
        }
    }

    Ok(())
}

pub(crate) fn create_output(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
