//! Interactive prompts for missing command-line fields

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

/// Ask for a single field, returning the line without its line ending
///
/// An empty answer falls back to `default` when one is given. End of input
/// yields an empty string.
pub fn prompt_field<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Option<&str>,
) -> ExpenseResult<String>
where
    R: BufRead,
    W: Write,
{
    match default {
        Some(default) => write!(output, "{} [{}]: ", label, default)?,
        None => write!(output, "{}: ", label)?,
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\n', '\r']);

    match default {
        Some(default) if answer.is_empty() => Ok(default.to_string()),
        _ => Ok(answer.to_string()),
    }
}

/// Use the provided value, or prompt for it when absent
pub fn value_or_prompt<R, W>(
    value: Option<String>,
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Option<&str>,
) -> ExpenseResult<String>
where
    R: BufRead,
    W: Write,
{
    match value {
        Some(value) => Ok(value),
        None => prompt_field(input, output, label, default),
    }
}
