//! Expense tracker service
//!
//! Ties the ledger to its store and exposes everything a front end needs:
//! load, append, save and the two reports. Prompting and formatting stay
//! with the caller.

use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{Expense, Ledger};
use crate::reports::{CategoryReport, DateReport};
use crate::storage::ExpenseStore;

/// The ledger for the running session plus the store it came from
pub struct ExpenseTracker {
    store: ExpenseStore,
    ledger: Ledger,
}

impl ExpenseTracker {
    /// Open the store at `paths` and load whatever ledger it holds
    pub fn open(paths: ExpensePaths) -> ExpenseResult<Self> {
        let store = ExpenseStore::open(paths)?;
        let ledger = Ledger::from_records(store.load());
        Ok(Self { store, ledger })
    }

    /// Get the underlying store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// The current ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Replace the in-memory ledger with what is on disk
    pub fn load(&mut self) -> &Ledger {
        self.ledger = Ledger::from_records(self.store.load());
        &self.ledger
    }

    /// Append a new expense built from raw field text
    ///
    /// Blank fields are rejected with `IncompleteInput` and nothing is stored.
    /// The ledger is not saved; call [`save`](Self::save) afterwards.
    pub fn append(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<&Expense> {
        let expense = Expense::new(date, category, amount, description)?;
        self.ledger.append(expense);
        Ok(&self.ledger.records()[self.ledger.len() - 1])
    }

    /// Persist the current ledger
    pub fn save(&self) -> ExpenseResult<()> {
        self.store.save(self.ledger.records())
    }

    /// Append and immediately save
    pub fn add(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<Expense> {
        let expense = self.append(date, category, amount, description)?.clone();
        self.save()?;
        info!(date = expense.date(), category = expense.category(), "expense added");
        Ok(expense)
    }

    /// Totals per category for the current ledger
    pub fn report_by_category(&self) -> ExpenseResult<CategoryReport> {
        CategoryReport::generate(self.ledger.records())
    }

    /// Totals per date for the current ledger
    pub fn report_by_date(&self) -> ExpenseResult<DateReport> {
        DateReport::generate(self.ledger.records())
    }
}
