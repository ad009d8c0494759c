//! Expense Tracker - personal expense ledger with reports
//!
//! This library records expenses in an ordered ledger, persists it to a JSON
//! file with a plain-text mirror alongside, and aggregates it into totals by
//! category and by date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Tracker directory resolution and display settings
//! - `error`: Custom error types
//! - `models`: The expense record and the in-memory ledger
//! - `storage`: JSON file storage and the text mirror
//! - `reports`: Category and date aggregation
//! - `services`: The tracker service front ends talk to
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::open(ExpensePaths::new()?)?;
//! tracker.append("2024-01-01", "Food", "12.50", "Lunch")?;
//! tracker.save()?;
//! let report = tracker.report_by_category()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
pub use models::{Expense, Ledger};
pub use reports::{totals_by_category, totals_by_date};
pub use services::ExpenseTracker;
pub use storage::ExpenseStore;
