//! User settings for the expense tracker
//!
//! Display preferences only; nothing here changes how the ledger is stored.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown in reports and listings
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of decimal places shown for totals
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Format used to suggest today's date when adding an expense (strftime)
    #[serde(default = "default_date_format")]
    pub default_date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_decimal_places() -> usize {
    2
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            decimal_places: default_decimal_places(),
            default_date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        validate_date_format(&settings.default_date_format)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Today's date rendered with the configured format
    ///
    /// Falls back to `%Y-%m-%d` if the configured format cannot be rendered.
    pub fn today(&self) -> String {
        let now = chrono::Local::now();
        let mut rendered = String::new();
        if write!(rendered, "{}", now.format(&self.default_date_format)).is_ok() {
            return rendered;
        }
        now.format(&default_date_format()).to_string()
    }
}

/// Reject strftime formats chrono cannot render
fn validate_date_format(format: &str) -> Result<(), ExpenseError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ExpenseError::Config(format!(
            "Invalid default_date_format '{}' in settings file",
            format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.default_date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("tracker"));

        let settings = Settings {
            currency_symbol: "€".into(),
            decimal_places: 3,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.decimal_places, 2);
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_today_falls_back_on_invalid_format() {
        let settings = Settings {
            default_date_format: "%Q".into(),
            ..Settings::default()
        };
        let today = settings.today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
    }

    #[test]
    fn test_today_uses_format() {
        let settings = Settings::default();
        let today = settings.today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
    }
}
