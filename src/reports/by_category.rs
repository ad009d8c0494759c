//! Spending by category
//!
//! Groups expenses by exact category text (case-sensitive, untrimmed).

use std::collections::HashMap;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_money;
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::{amount_at, csv_error};

/// Sum amounts per category
///
/// Fails with `MalformedAmount` on the first expense whose amount is not a
/// number; nothing is skipped or treated as zero.
pub fn totals_by_category(expenses: &[Expense]) -> ExpenseResult<HashMap<String, f64>> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for (position, expense) in expenses.iter().enumerate() {
        let amount = amount_at(position, expense)?;
        *totals.entry(expense.category().to_string()).or_insert(0.0) += amount;
    }

    Ok(totals)
}

/// One row of the category report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Number of expenses in this category
    pub count: usize,
}

/// Category report
///
/// Rows are ordered by category name, not by when a category first appeared
/// in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// Rows sorted by category name
    pub rows: Vec<CategoryTotal>,
    /// Sum over every expense
    pub total: f64,
    pub expense_count: usize,
}

impl CategoryReport {
    /// Generate the report for a slice of expenses
    pub fn generate(expenses: &[Expense]) -> ExpenseResult<Self> {
        let totals = totals_by_category(expenses)?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for expense in expenses {
            *counts.entry(expense.category()).or_insert(0) += 1;
        }

        let mut rows: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| {
                let count = counts.get(category.as_str()).copied().unwrap_or(0);
                CategoryTotal {
                    category,
                    total,
                    count,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category));

        Ok(Self {
            total: rows.iter().map(|r| r.total).sum(),
            expense_count: expenses.len(),
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        for row in &self.rows {
            output.push_str(&format!(
                "Category: {}, Total Spent: {}\n",
                row.category,
                format_money(row.total, settings)
            ));
        }

        if !self.is_empty() {
            output.push_str(&format!(
                "\nTotal Spent: {} across {} expenses\n",
                format_money(self.total, settings),
                self.expense_count
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Total", "Count"])
            .map_err(csv_error)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.category.clone(),
                    format!("{:.2}", row.total),
                    row.count.to_string(),
                ])
                .map_err(csv_error)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
