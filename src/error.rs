//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The ledger file exists but could not be read or parsed
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// The ledger file could not be written
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// A required expense field was missing or blank
    #[error("Incomplete input: {field} must be filled in")]
    IncompleteInput { field: &'static str },

    /// A stored amount could not be interpreted as a number
    #[error("Malformed amount '{amount}' in expense #{position}")]
    MalformedAmount { position: usize, amount: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an "incomplete input" error for the named field
    pub fn incomplete(field: &'static str) -> Self {
        Self::IncompleteInput { field }
    }

    /// Create a "malformed amount" error for the record at `position`
    pub fn malformed_amount(position: usize, amount: impl Into<String>) -> Self {
        Self::MalformedAmount {
            position,
            amount: amount.into(),
        }
    }

    /// Check if this is a malformed amount error
    pub fn is_malformed_amount(&self) -> bool {
        matches!(self, Self::MalformedAmount { .. })
    }

    /// Check if this is an incomplete input error
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, Self::IncompleteInput { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
