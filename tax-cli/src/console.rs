//! Interactive prompting for a filing status and taxable income.
//!
//! Prompts repeat until the entered value is valid. Reading and writing go
//! through generic [`BufRead`]/[`Write`] handles so sessions can be scripted.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use tax_core::{FilingStatus, TaxBreakdown, TaxError, breakdown};
use tracing::{debug, warn};

use crate::report::{render_menu, render_report};
use crate::utils::parse_decimal;

const STATUS_PROMPT: &str = "Enter filing status (0-3): ";
const INCOME_PROMPT: &str = "Enter taxable income: $";
const NOT_A_NUMBER: &str = "Error: Please enter a valid number.";

/// Printed below the error when a session fails.
pub const RETRY_HINT: &str = "Please try again with valid inputs.";

/// Writes `prompt` and reads one line. Returns `None` at end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until a filing status code in `0..=3` is entered.
///
/// # Errors
///
/// Fails if input ends before a valid status is entered or on I/O errors.
pub fn prompt_status<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FilingStatus> {
    loop {
        let Some(answer) = read_answer(input, output, STATUS_PROMPT)? else {
            bail!("input ended before a filing status was entered");
        };
        let Ok(code) = answer.parse::<i32>() else {
            warn!(input = %answer, "rejected filing status: not a number");
            writeln!(output, "{NOT_A_NUMBER}")?;
            continue;
        };
        match FilingStatus::from_code(code) {
            Ok(status) => {
                debug!(%status, "filing status selected");
                return Ok(status);
            }
            Err(_) => {
                warn!(code, "rejected filing status: out of range");
                writeln!(output, "Error: Status must be between 0 and 3.")?;
            }
        }
    }
}

/// Prompts until a non-negative income is entered.
///
/// # Errors
///
/// Fails if input ends before a valid income is entered or on I/O errors.
pub fn prompt_income<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Decimal> {
    loop {
        let Some(answer) = read_answer(input, output, INCOME_PROMPT)? else {
            bail!("input ended before a taxable income was entered");
        };
        match parse_decimal(&answer) {
            Ok(income) if income.is_sign_negative() && !income.is_zero() => {
                warn!(%income, "rejected income: negative");
                writeln!(output, "Error: Income cannot be negative.")?;
            }
            Ok(income) => {
                debug!(%income, "taxable income entered");
                return Ok(income);
            }
            Err(e) => {
                warn!(error = %e, "rejected income: not a number");
                writeln!(output, "{NOT_A_NUMBER}")?;
            }
        }
    }
}

/// Runs one interactive session: menu, status and income prompts, report.
///
/// Returns the computed result so callers can log or reuse it.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    show_brackets: bool,
) -> Result<TaxBreakdown> {
    write!(output, "{}", render_menu())?;

    let status = prompt_status(input, output)?;
    let income = prompt_income(input, output)?;

    let result = breakdown(status, income)?;
    write!(output, "{}", render_report(&result, show_brackets))?;
    output.flush()?;

    Ok(result)
}

/// Renders a failed session: the cause first, then [`RETRY_HINT`].
pub fn render_failure(err: &anyhow::Error) -> String {
    format!("\nError: {err:#}\n{RETRY_HINT}\n")
}

/// Whether `err` was caused by a rejected filing status or income anywhere
/// in its source chain.
pub fn is_invalid_argument(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<TaxError>()
            .is_some_and(TaxError::is_invalid_argument)
    })
}
