//! YAML Export functionality
//!
//! Exports the ledger to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;
use crate::models::Expense;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = LedgerExport::new(expenses);

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|()| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|()| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|()| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
