//! Expense display formatting
//!
//! Renders the ledger in insertion order as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

/// Table row for a single expense
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format every expense as a table, numbered from 1
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses to show.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, expense)| ExpenseRow {
        index: i + 1,
        date: expense.date().to_string(),
        category: expense.category().to_string(),
        amount: format!("{}{}", settings.currency_symbol, expense.amount()),
        description: expense.description().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output
}
