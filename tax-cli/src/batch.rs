//! CSV batch computation.
//!
//! ## CSV Format
//!
//! Input rows are matched by header name; column order does not matter.
//!
//! | Column   | Type    | Notes                          |
//! |----------|---------|--------------------------------|
//! | `status` | integer | Filing status code, `0` to `3` |
//! | `income` | decimal | Non-negative taxable income    |
//!
//! Income cells are read as text and parsed exactly, so `$` prefixes and
//! quoted comma separators (`"10,000"`) are accepted as at the prompt.
//!
//! Output repeats both columns and appends `tax`, rounded to the cent:
//!
//! ```csv
//! status,income,tax
//! 0,10000,1082.50
//! ```
use std::io::{Read, Write};
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::{TaxError, compute_tax};
use thiserror::Error;
use tracing::{debug, info};

use crate::utils::{ParseDecimalError, parse_decimal};

#[derive(Debug, Deserialize)]
struct InputRow {
    status: i32,
    income: String,
}

/// One computed row of batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub status: i32,
    pub income: Decimal,
    pub tax: Decimal,
}

/// Errors that can occur while running a batch.
///
/// Row errors display only the 1-based data row number; the rejected value
/// is the error's source.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Malformed CSV (missing column, non-numeric status) or a write failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An `income` cell is not a decimal amount.
    #[error("row {row}")]
    Income {
        row: usize,
        #[source]
        source: ParseDecimalError,
    },

    /// A row was well formed but its values were rejected by the calculator.
    #[error("row {row}")]
    Tax {
        row: usize,
        #[source]
        source: TaxError,
    },
}

/// Computes the tax for every row read from `input`.
///
/// Stops at the first invalid row.
pub fn compute_rows<R: Read>(input: R) -> Result<Vec<BatchResult>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    reader
        .deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1;
            let income = parse_decimal(&row.income).map_err(|source| BatchError::Income {
                row: row_number,
                source,
            })?;
            let tax = compute_tax(row.status, income).map_err(|source| BatchError::Tax {
                row: row_number,
                source,
            })?;
            debug!(row = row_number, status = row.status, %income, %tax, "computed row");
            Ok(BatchResult {
                status: row.status,
                income,
                tax,
            })
        })
        .collect()
}

/// Reads rows from `input` and writes `status,income,tax` CSV to `output`.
///
/// Nothing is written when any row is invalid. Returns the number of rows
/// written.
pub fn run_batch<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<usize, BatchError> {
    let results = compute_rows(input)?;

    let mut writer = csv::Writer::from_writer(output);
    for result in &results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    info!(rows = results.len(), "batch complete");
    Ok(results.len())
}

/// Convenience wrapper: open `path` and delegate to [`run_batch`].
pub fn run_batch_file<W: Write>(
    path: &Path,
    output: W,
) -> Result<usize, BatchError> {
    let file = std::fs::File::open(path)?;
    run_batch(file, output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn computes_each_row_in_order() {
        let csv = "status,income\n0,10000\n3,50000\n1,16700\n";

        let results = compute_rows(csv.as_bytes()).unwrap();

        assert_eq!(
            results,
            vec![
                BatchResult {
                    status: 0,
                    income: dec!(10000),
                    tax: dec!(1082.50),
                },
                BatchResult {
                    status: 3,
                    income: dec!(50000),
                    tax: dec!(7352.50),
                },
                BatchResult {
                    status: 1,
                    income: dec!(16700),
                    tax: dec!(1670.00),
                },
            ]
        );
    }

    #[test]
    fn column_order_and_whitespace_do_not_matter() {
        let csv = "income , status\n 8350 , 0 \n";

        let results = compute_rows(csv.as_bytes()).unwrap();

        assert_eq!(results[0].tax, dec!(835.00));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let results = compute_rows("status,income\n".as_bytes()).unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn invalid_status_reports_row_number() {
        let csv = "status,income\n0,100\n4,100\n";

        match compute_rows(csv.as_bytes()).unwrap_err() {
            BatchError::Tax { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, TaxError::InvalidFilingStatus(4));
            }
            other => panic!("expected Tax error, got {other:?}"),
        }
    }

    #[test]
    fn negative_income_reports_row_number() {
        let csv = "status,income\n2,-0.01\n";

        let err = compute_rows(csv.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "row 1");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("income cannot be negative: -0.01".to_string())
        );
        assert_eq!(
            format!("{:#}", anyhow::Error::new(err)),
            "row 1: income cannot be negative: -0.01"
        );
    }

    #[test]
    fn decimal_precision_is_preserved() {
        let csv = "status,income\n0,1234.567890123456789\n";

        let results = compute_rows(csv.as_bytes()).unwrap();

        assert_eq!(results[0].income, dec!(1234.567890123456789));
        assert_eq!(results[0].income.to_string(), "1234.567890123456789");
        assert_eq!(results[0].tax, dec!(123.46));
    }

    #[test]
    fn income_beyond_u64_range_is_accepted() {
        let csv = "status,income\n0,99999999999999999999\n";

        let results = compute_rows(csv.as_bytes()).unwrap();

        assert_eq!(results[0].income, dec!(99999999999999999999));
        assert_eq!(
            results[0].tax,
            compute_tax(0, dec!(99999999999999999999)).unwrap()
        );
    }

    #[test]
    fn income_accepts_currency_formatting() {
        let csv = "status,income\n0,\"10,000\"\n0,$8350\n";

        let results = compute_rows(csv.as_bytes()).unwrap();

        assert_eq!(results[0].income, dec!(10000));
        assert_eq!(results[0].tax, dec!(1082.50));
        assert_eq!(results[1].tax, dec!(835.00));
    }

    #[test]
    fn run_batch_echoes_income_exactly() {
        let mut output = Vec::new();

        run_batch("status,income\n0,0.123456789012345678\n".as_bytes(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "status,income,tax\n0,0.123456789012345678,0.01\n"
        );
    }

    #[test]
    fn non_numeric_income_reports_row_number() {
        let csv = "status,income\n0,100\n1,lots\n";

        match compute_rows(csv.as_bytes()).unwrap_err() {
            BatchError::Income { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.to_string(), "invalid decimal 'lots'");
            }
            other => panic!("expected Income error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_csv_error() {
        let csv = "status\n0\n";

        let err = compute_rows(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, BatchError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn run_batch_writes_tax_column() {
        let mut output = Vec::new();

        let written = run_batch("status,income\n0,0\n0,10000\n".as_bytes(), &mut output).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "status,income,tax\n0,0,0.00\n0,10000,1082.50\n"
        );
    }

    #[test]
    fn run_batch_writes_nothing_on_error() {
        let mut output = Vec::new();

        let result = run_batch("status,income\n0,10\n9,10\n".as_bytes(), &mut output);

        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
