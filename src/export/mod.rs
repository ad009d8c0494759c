//! Export module for the expense tracker
//!
//! Writes the ledger to an arbitrary writer in one of three formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: ledger plus export metadata
//! - YAML: same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
