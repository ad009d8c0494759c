//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Tracker directory resolution
//! - User display settings

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
