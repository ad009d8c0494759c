//! Plain-text mirror of the ledger
//!
//! `expenses.txt` is regenerated on every save for people who want to read
//! their expenses without any tooling. It is never read back.

use crate::models::Expense;

/// Render one line per expense: `date - category - $amount - description`
pub fn render_mirror(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&expense.to_string());
        output.push('\n');
    }
    output
}
