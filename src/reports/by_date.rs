//! Spending over time
//!
//! Groups expenses by exact date text and orders the groups by plain string
//! comparison. Dates written as `YYYY-MM-DD` therefore come out in
//! chronological order; any other format sorts lexicographically, not by
//! calendar.

use std::collections::BTreeMap;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_money;
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::{amount_at, csv_error};

/// Sum amounts per date, ascending by date string
pub fn totals_by_date(expenses: &[Expense]) -> ExpenseResult<Vec<(String, f64)>> {
    Ok(group_by_date(expenses)?
        .into_iter()
        .map(|(date, (total, _))| (date.to_string(), total))
        .collect())
}

/// Date -> (total, count), ordered by date
fn group_by_date(expenses: &[Expense]) -> ExpenseResult<BTreeMap<&str, (f64, usize)>> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for (position, expense) in expenses.iter().enumerate() {
        let amount = amount_at(position, expense)?;
        let entry = groups.entry(expense.date()).or_insert((0.0, 0));
        entry.0 += amount;
        entry.1 += 1;
    }

    Ok(groups)
}

/// One row of the date report
#[derive(Debug, Clone, PartialEq)]
pub struct DateTotal {
    pub date: String,
    pub total: f64,
    /// Number of expenses on this date
    pub count: usize,
}

/// Date report
#[derive(Debug, Clone, PartialEq)]
pub struct DateReport {
    /// Rows ascending by date string
    pub rows: Vec<DateTotal>,
    pub total: f64,
    pub expense_count: usize,
}

impl DateReport {
    /// Generate the report for a slice of expenses
    pub fn generate(expenses: &[Expense]) -> ExpenseResult<Self> {
        let rows: Vec<DateTotal> = group_by_date(expenses)?
            .into_iter()
            .map(|(date, (total, count))| DateTotal {
                date: date.to_string(),
                total,
                count,
            })
            .collect();

        Ok(Self {
            total: rows.iter().map(|r| r.total).sum(),
            expense_count: expenses.len(),
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First and last date in the report
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some((first.date.as_str(), last.date.as_str()))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        for row in &self.rows {
            output.push_str(&format!(
                "Date: {}, Total Spent: {}\n",
                row.date,
                format_money(row.total, settings)
            ));
        }

        if let Some((first, last)) = self.date_range() {
            output.push_str(&format!(
                "\nTotal Spent: {} from {} to {}\n",
                format_money(self.total, settings),
                first,
                last
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Date", "Total", "Count"])
            .map_err(csv_error)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.date.clone(),
                    format!("{:.2}", row.total),
                    row.count.to_string(),
                ])
                .map_err(csv_error)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_expenses;

    #[test]
    fn test_totals_by_date() {
        let totals = totals_by_date(&sample_expenses()).unwrap();

        assert_eq!(
            totals,
            vec![
                ("2024-01-01".to_string(), 30.0),
                ("2024-01-02".to_string(), 5.0)
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(totals_by_date(&[]).unwrap().is_empty());

        let report = DateReport::generate(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.date_range(), None);
        assert_eq!(report.format_terminal(&Settings::default()), "");
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let expenses = vec![
            Expense::new("2024-10-01", "Food", "1", "a").unwrap(),
            Expense::new("2024-02-01", "Food", "2", "b").unwrap(),
            Expense::new("01/15/2025", "Food", "4", "c").unwrap(),
        ];

        let dates: Vec<_> = totals_by_date(&expenses)
            .unwrap()
            .into_iter()
            .map(|(date, _)| date)
            .collect();
        assert_eq!(dates, vec!["01/15/2025", "2024-02-01", "2024-10-01"]);
    }

    #[test]
    fn test_malformed_amount() {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", "1", "a").unwrap(),
            Expense::new("2024-01-02", "Food", "twelve", "b").unwrap(),
        ];

        let err = totals_by_date(&expenses).unwrap_err();
        assert!(err.is_malformed_amount());
        assert!(err.to_string().contains("#1"));
        assert!(DateReport::generate(&expenses).is_err());
    }

    #[test]
    fn test_report_counts_and_range() {
        let report = DateReport::generate(&sample_expenses()).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].count, 2);
        assert_eq!(report.rows[1].count, 1);
        assert_eq!(report.total, 35.0);
        assert_eq!(report.date_range(), Some(("2024-01-01", "2024-01-02")));
    }

    #[test]
    fn test_format_terminal() {
        let report = DateReport::generate(&sample_expenses()).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.starts_with(
            "Date: 2024-01-01, Total Spent: $30.00\nDate: 2024-01-02, Total Spent: $5.00\n"
        ));
        assert!(output.contains("Total Spent: $35.00 from 2024-01-01 to 2024-01-02"));
    }

    #[test]
    fn test_export_csv() {
        let report = DateReport::generate(&sample_expenses()).unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv, "Date,Total,Count\n2024-01-01,30.00,2\n2024-01-02,5.00,1\n");
    }
}
