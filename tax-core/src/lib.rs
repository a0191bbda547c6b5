//! Progressive federal income tax calculator.
//!
//! Holds the fixed bracket schedule for each [`FilingStatus`] and computes the
//! tax owed on a taxable income by taxing each slice of income at its
//! bracket's marginal rate.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{BracketSlice, TaxBreakdown, breakdown, compute_tax, tax_for};
pub use error::TaxError;
pub use models::*;
