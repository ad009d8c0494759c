//! CSV Export functionality
//!
//! One row per expense, in ledger order, with the amount exactly as stored.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Category", "Amount", "Description"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date(),
                expense.category(),
                expense.amount(),
                expense.description(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_quotes_fields() {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", "12.50", "Lunch, with \"friends\"").unwrap(),
            Expense::new("2024-01-02", "Travel", "3", "Bus").unwrap(),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "Date,Category,Amount,Description\n\
             2024-01-01,Food,12.50,\"Lunch, with \"\"friends\"\"\"\n\
             2024-01-02,Travel,3,Bus\n"
        );
    }

    #[test]
    fn test_export_csv_empty() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,Category,Amount,Description\n"
        );
    }
}
