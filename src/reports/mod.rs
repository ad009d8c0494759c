//! Reports module for the expense tracker
//!
//! The two aggregation functions, [`totals_by_category`] and
//! [`totals_by_date`], are pure: they take a slice of expenses and never touch
//! storage. [`CategoryReport`] and [`DateReport`] wrap them with the extra
//! bookkeeping needed for display and CSV export.
//!
//! Amounts are summed as `f64` and returned unrounded. Rounding for display
//! happens in the formatting helpers.

pub mod by_category;
pub mod by_date;

pub use by_category::{totals_by_category, CategoryReport, CategoryTotal};
pub use by_date::{totals_by_date, DateReport, DateTotal};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Numeric amount of the expense at `position`, or `MalformedAmount`
fn amount_at(position: usize, expense: &Expense) -> ExpenseResult<f64> {
    expense
        .amount_value()
        .ok_or_else(|| ExpenseError::malformed_amount(position, expense.amount()))
}

fn csv_error(err: csv::Error) -> ExpenseError {
    ExpenseError::Export(err.to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::Expense;

    /// The three-expense ledger used across report tests
    pub fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-01", "Food", "10", "a").unwrap(),
            Expense::new("2024-01-02", "Food", "5", "b").unwrap(),
            Expense::new("2024-01-01", "Travel", "20", "c").unwrap(),
        ]
    }
}
