//! Expense CLI commands
//!
//! Adding and listing expenses.

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::ExpenseResult;
use crate::services::ExpenseTracker;

use super::prompt::{prompt_field, value_or_prompt};

/// Arguments for `add`; anything omitted is asked for interactively
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category label
    #[arg(short, long)]
    pub category: Option<String>,

    /// Amount spent
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// What the money was spent on
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Handle `add` using the process's stdin and stdout
pub fn handle_add_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    add_expense(tracker, settings, args, &mut input, &mut output)
}

/// Collect the fields, then append and save the expense
pub fn add_expense<R, W>(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    args: AddArgs,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()>
where
    R: BufRead,
    W: Write,
{
    let date = match args.date {
        Some(date) => date,
        None => {
            let today = settings.today();
            prompt_field(input, output, "Enter the date", Some(today.as_str()))?
        }
    };
    let category = value_or_prompt(args.category, input, output, "Enter the category", None)?;
    let amount = value_or_prompt(args.amount, input, output, "Enter the amount", None)?;
    let description =
        value_or_prompt(args.description, input, output, "Enter the description", None)?;

    let expense = tracker.add(&date, &category, &amount, &description)?;

    writeln!(output, "Expense added successfully!")?;
    writeln!(output, "  {}", expense)?;
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(tracker: &ExpenseTracker, settings: &Settings) -> ExpenseResult<()> {
    print!(
        "{}",
        format_expense_list(tracker.ledger().records(), settings)
    );
    Ok(())
}
