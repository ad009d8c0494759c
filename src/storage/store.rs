//! Expense store
//!
//! Loads and saves the full ledger to `expenses.json` and keeps the
//! `expenses.txt` mirror in step with it.

use tracing::{debug, error, warn};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic, write_text_atomic};
use super::mirror::render_mirror;

/// Durable storage for the ledger
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    paths: ExpensePaths,
}

impl ExpenseStore {
    /// Open the store, creating the tracker directory if it is missing
    pub fn open(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load every stored expense in ledger order
    ///
    /// A missing file is an empty ledger. A file that cannot be read or
    /// parsed is logged and also treated as empty, so startup never fails.
    pub fn load(&self) -> Vec<Expense> {
        match self.try_load() {
            Ok(expenses) => {
                debug!(
                    count = expenses.len(),
                    path = %self.paths.expenses_file().display(),
                    "loaded expenses"
                );
                expenses
            }
            Err(err) => {
                warn!("{}; starting with an empty ledger", err);
                Vec::new()
            }
        }
    }

    /// Load, surfacing read and parse failures
    ///
    /// Records with a blank field are logged and skipped.
    pub fn try_load(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses: Vec<Expense> = read_json(self.paths.expenses_file())?;
        Ok(expenses
            .into_iter()
            .enumerate()
            .filter_map(|(position, expense)| match expense.validate() {
                Ok(()) => Some(expense),
                Err(err) => {
                    warn!(position, "skipping stored expense: {}", err);
                    None
                }
            })
            .collect())
    }

    /// Overwrite the ledger file with `expenses`, then refresh the mirror
    ///
    /// Only a failure to write `expenses.json` is returned. A mirror failure
    /// is logged and otherwise ignored.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let path = self.paths.expenses_file();
        write_json_atomic(&path, &expenses).map_err(|err| {
            error!(path = %path.display(), "failed to save expenses: {}", err);
            err
        })?;
        debug!(count = expenses.len(), path = %path.display(), "saved expenses");

        let mirror_path = self.paths.mirror_file();
        if let Err(err) = write_text_atomic(&mirror_path, &render_mirror(expenses)) {
            warn!(path = %mirror_path.display(), "failed to write text mirror: {}", err);
        }

        Ok(())
    }
}
