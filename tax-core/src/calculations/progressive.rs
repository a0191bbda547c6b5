use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::{round_half_up, round_to};
use crate::error::TaxError;
use crate::models::{FilingStatus, TaxBracket, bracket_table};

/// The portion of income that fell inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSlice {
    /// Lower edge of the bracket (the previous bracket's upper limit).
    pub lower: Decimal,
    /// Upper edge of the bracket, `None` for the unbounded top bracket.
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    /// Income taxed inside this bracket.
    pub taxed_amount: Decimal,
    /// Unrounded tax on `taxed_amount`.
    pub tax: Decimal,
}

/// Full result of a progressive tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub status: FilingStatus,
    pub income: Decimal,
    /// Slices from the lowest bracket up to the one containing the income.
    pub slices: Vec<BracketSlice>,
    /// Total tax rounded to the cent.
    pub tax: Decimal,
    /// Rate applied to the last dollar of income.
    pub marginal_rate: Decimal,
    /// Total tax divided by income, to four decimal places.
    pub effective_rate: Decimal,
}

/// Computes the tax owed for a filing status code and taxable income.
///
/// The status code must be 0 (single), 1 (married filing jointly),
/// 2 (married filing separately) or 3 (head of household). The result is
/// rounded to the cent, half-up.
///
/// # Errors
///
/// - [`TaxError::InvalidFilingStatus`] if `status_code` is not in `0..=3`
/// - [`TaxError::NegativeIncome`] if `income` is below zero
///
/// The status is checked first.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::compute_tax;
///
/// assert_eq!(compute_tax(0, dec!(10000)).unwrap(), dec!(1082.50));
/// assert!(compute_tax(4, dec!(10000)).is_err());
/// ```
pub fn compute_tax(
    status_code: i32,
    income: Decimal,
) -> Result<Decimal, TaxError> {
    let status = FilingStatus::from_code(status_code)?;
    tax_for(status, income)
}

/// Computes the tax owed for an already validated filing status.
///
/// # Errors
///
/// Returns [`TaxError::NegativeIncome`] if `income` is below zero.
pub fn tax_for(
    status: FilingStatus,
    income: Decimal,
) -> Result<Decimal, TaxError> {
    tax_for_table(bracket_table(status), income)
}

/// Computes the tax owed on `income` under an arbitrary bracket schedule.
///
/// # Errors
///
/// - [`TaxError::NegativeIncome`] if `income` is below zero
/// - [`TaxError::InvalidTable`] if the schedule has no bracket containing
///   `income`, which only happens when its last bracket is bounded
pub fn tax_for_table(
    brackets: &[TaxBracket],
    income: Decimal,
) -> Result<Decimal, TaxError> {
    ensure_non_negative(income)?;
    if income.is_zero() {
        return Ok(Decimal::new(0, 2));
    }

    let total: Decimal = taxed_slices(brackets, income)?
        .iter()
        .map(|slice| slice.tax)
        .sum();

    Ok(round_half_up(total))
}

/// Computes the tax owed along with the per-bracket detail behind it.
///
/// The `tax` field always equals [`tax_for`] for the same arguments.
///
/// # Errors
///
/// Returns [`TaxError::NegativeIncome`] if `income` is below zero.
pub fn breakdown(
    status: FilingStatus,
    income: Decimal,
) -> Result<TaxBreakdown, TaxError> {
    ensure_non_negative(income)?;
    let brackets = bracket_table(status);

    if income.is_zero() {
        return Ok(TaxBreakdown {
            status,
            income,
            slices: Vec::new(),
            tax: Decimal::new(0, 2),
            marginal_rate: brackets.first().map_or(Decimal::ZERO, |b| b.rate),
            effective_rate: Decimal::ZERO,
        });
    }

    let slices = taxed_slices(brackets, income)?;
    let tax = round_half_up(slices.iter().map(|slice| slice.tax).sum());
    let marginal_rate = slices.last().map_or(Decimal::ZERO, |slice| slice.rate);
    let effective_rate = round_to(tax / income, 4);

    Ok(TaxBreakdown {
        status,
        income,
        slices,
        tax,
        marginal_rate,
        effective_rate,
    })
}

fn ensure_non_negative(income: Decimal) -> Result<(), TaxError> {
    if income.is_sign_negative() && !income.is_zero() {
        return Err(TaxError::NegativeIncome(income));
    }
    Ok(())
}

/// Walks the schedule from the lowest bracket, fully taxing every bracket the
/// income exceeds and stopping at the bracket that contains it.
fn taxed_slices(
    brackets: &[TaxBracket],
    income: Decimal,
) -> Result<Vec<BracketSlice>, TaxError> {
    let mut slices = Vec::with_capacity(brackets.len());
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        let top = match bracket.upper_limit {
            Some(limit) if bracket.is_exceeded_by(income) => limit,
            _ => income,
        };
        let taxed_amount = top - previous_limit;
        let slice = BracketSlice {
            lower: previous_limit,
            upper: bracket.upper_limit,
            rate: bracket.rate,
            taxed_amount,
            tax: taxed_amount * bracket.rate,
        };
        trace!(
            lower = %slice.lower,
            rate = %slice.rate,
            taxed = %slice.taxed_amount,
            tax = %slice.tax,
            "taxed bracket slice"
        );
        slices.push(slice);

        if top == income {
            return Ok(slices);
        }
        previous_limit = top;
    }

    Err(TaxError::InvalidTable(format!(
        "income {income} exceeds the last bracket"
    )))
}
