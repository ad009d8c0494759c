//! Ledger model
//!
//! The in-memory, insertion-ordered collection of expenses for a session.

use super::expense::Expense;

/// Ordered collection of expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from previously stored expenses, keeping their order
    pub fn from_records(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Add an expense to the end of the ledger
    ///
    /// Duplicates are allowed.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in insertion order
    pub fn records(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
