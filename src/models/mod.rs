//! Core data models for the expense tracker
//!
//! An [`Expense`] is one recorded entry; a [`Ledger`] is the ordered
//! collection of them held for the current session.

pub mod expense;
pub mod ledger;

pub use expense::Expense;
pub use ledger::Ledger;
