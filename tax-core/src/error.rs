use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the tax calculator.
///
/// The first two variants are argument validation failures detected before
/// any computation takes place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    /// The filing status code is not one of the four known statuses.
    #[error("invalid filing status {0}: must be between 0 and 3")]
    InvalidFilingStatus(i32),

    /// Taxable income was below zero.
    #[error("income cannot be negative: {0}")]
    NegativeIncome(Decimal),

    /// A bracket table violates its ordering or coverage rules.
    #[error("invalid bracket table: {0}")]
    InvalidTable(String),
}

impl TaxError {
    /// True for errors caused by caller-supplied arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidFilingStatus(_) | Self::NegativeIncome(_))
    }
}
