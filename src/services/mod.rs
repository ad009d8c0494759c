//! Business logic layer for the expense tracker
//!
//! Services sit between the front end and the storage layer.

pub mod tracker;

pub use tracker::ExpenseTracker;
