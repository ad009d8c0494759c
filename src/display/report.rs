//! Report formatting utilities for terminal output

use crate::config::Settings;

/// Format a total with the configured currency symbol and precision
pub fn format_money(amount: f64, settings: &Settings) -> String {
    format!(
        "{}{:.*}",
        settings.currency_symbol, settings.decimal_places, amount
    )
}
