//! Progressive income tax calculations.
//!
//! The calculator walks a filing status' bracket schedule from the lowest
//! bracket up, taxing each slice of income at that bracket's marginal rate.

pub mod common;
pub mod progressive;

pub use progressive::{BracketSlice, TaxBreakdown, breakdown, compute_tax, tax_for, tax_for_table};
