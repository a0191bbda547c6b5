use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TaxError;

/// A contiguous income range taxed at a single marginal rate.
///
/// The range starts at the previous bracket's upper limit (or zero for the
/// first bracket). An `upper_limit` of `None` means the bracket is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(
        upper_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_limit: None,
            rate,
        }
    }

    /// Whether `income` lies above this bracket's upper limit.
    pub fn is_exceeded_by(
        &self,
        income: Decimal,
    ) -> bool {
        self.upper_limit.is_some_and(|limit| income > limit)
    }
}

/// An ordered bracket schedule for one filing status.
pub type BracketTable = &'static [TaxBracket];

/// Checks that a bracket sequence forms a valid progressive schedule.
///
/// A valid schedule is non-empty, has strictly increasing positive upper
/// limits, ends with exactly one unbounded bracket, and only uses rates in
/// `[0, 1]`.
///
/// # Errors
///
/// Returns [`TaxError::InvalidTable`] describing the first violation found.
pub fn validate_table(brackets: &[TaxBracket]) -> Result<(), TaxError> {
    let Some((last, bounded)) = brackets.split_last() else {
        return Err(TaxError::InvalidTable("table is empty".to_string()));
    };

    let mut previous_limit = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(TaxError::InvalidTable(format!(
                "bracket {index} has rate {} outside [0, 1]",
                bracket.rate
            )));
        }
        if index < bounded.len() {
            let Some(limit) = bracket.upper_limit else {
                return Err(TaxError::InvalidTable(format!(
                    "bracket {index} is unbounded but is not the last bracket"
                )));
            };
            if limit <= previous_limit {
                return Err(TaxError::InvalidTable(format!(
                    "bracket {index} upper limit {limit} does not exceed {previous_limit}"
                )));
            }
            previous_limit = limit;
        }
    }

    if last.upper_limit.is_some() {
        return Err(TaxError::InvalidTable(
            "last bracket must be unbounded".to_string(),
        ));
    }

    Ok(())
}
