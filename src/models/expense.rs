//! Expense model
//!
//! A single expense entry. Every field is kept as the exact text the user
//! supplied; the amount is only interpreted as a number when reports are
//! generated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// One recorded expense
///
/// Expenses have no identifier; they are addressed by their position in the
/// [`Ledger`](super::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date, stored verbatim (conventionally `YYYY-MM-DD`)
    date: String,

    /// Free-text category label
    category: String,

    /// Monetary amount in its original textual form
    #[serde(deserialize_with = "amount_text")]
    amount: String,

    /// Free-text description
    description: String,
}

impl Expense {
    /// Create a new expense, rejecting any blank field
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> ExpenseResult<Self> {
        let expense = Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Check that every field is present
    pub fn validate(&self) -> ExpenseResult<()> {
        let fields = [
            ("date", &self.date),
            ("category", &self.category),
            ("amount", &self.amount),
            ("description", &self.description),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ExpenseError::incomplete(*field)),
            None => Ok(()),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The amount exactly as it was entered
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Interpret the amount as a number, if it is one
    ///
    /// Surrounding whitespace is ignored.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - ${} - {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Accept the amount either as a string or as a bare JSON number
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountRepr {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Text(text) => text,
        AmountRepr::Number(number) => number.to_string(),
    })
}
