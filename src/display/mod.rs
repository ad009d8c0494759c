//! Display formatting for terminal output
//!
//! Rounding and currency symbols live here, never in the report engine.

pub mod expense;
pub mod report;

pub use expense::format_expense_list;
pub use report::format_money;
