//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, a plain-text mirror, and
//! automatic directory creation.

pub mod file_io;
pub mod mirror;
pub mod store;

pub use file_io::{read_json, write_json_atomic, write_text_atomic};
pub use mirror::render_mirror;
pub use store::ExpenseStore;
