//! JSON Export functionality
//!
//! Exports the ledger together with export metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export structure shared by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub expense_count: usize,

    /// Smallest and largest date string, if any
    pub earliest_date: Option<&'a str>,
    pub latest_date: Option<&'a str>,

    /// Every expense, in ledger order
    pub expenses: &'a [Expense],
}

impl<'a> LedgerExport<'a> {
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            expense_count: expenses.len(),
            earliest_date: expenses.iter().map(Expense::date).min(),
            latest_date: expenses.iter().map(Expense::date).max(),
            expenses,
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = LedgerExport::new(expenses);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json() {
        let expenses = vec![
            Expense::new("2024-01-02", "Food", "5", "b").unwrap(),
            Expense::new("2024-01-01", "Food", "10", "a").unwrap(),
        ];

        let mut buffer = Vec::new();
        export_json(&expenses, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["expense_count"], 2);
        assert_eq!(value["earliest_date"], "2024-01-01");
        assert_eq!(value["latest_date"], "2024-01-02");
        assert_eq!(value["expenses"][0]["description"], "b");
        assert_eq!(value["expenses"][1]["amount"], "10");
    }

    #[test]
    fn test_export_empty() {
        let mut buffer = Vec::new();
        export_json(&[], &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["expense_count"], 0);
        assert!(value["earliest_date"].is_null());
        assert_eq!(value["expenses"], serde_json::json!([]));
    }
}
