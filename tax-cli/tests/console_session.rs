//! Scripted interactive sessions driven through the public console API.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_cli::console;
use tax_core::FilingStatus;

fn session(
    script: &str,
    show_brackets: bool,
) -> (anyhow::Result<tax_core::TaxBreakdown>, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = console::run_session(&mut input, &mut output, show_brackets);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn head_of_household_session_after_retries() {
    let (result, output) = session("x\n5\n3\n-100\n50,000\n", false);

    let result = result.unwrap();
    assert_eq!(result.status, FilingStatus::HeadOfHousehold);
    assert_eq!(result.tax, dec!(7352.50));
    assert_eq!(output.matches("Enter filing status (0-3): ").count(), 3);
    assert_eq!(output.matches("Enter taxable income: $").count(), 2);
    assert!(output.contains("Error: Income cannot be negative.\n"));
    assert!(output.contains("Total Tax Owed: $7,352.50\n"));
}

#[test]
fn session_with_breakdown_shows_rates() {
    let (result, output) = session("1\n16700\n", true);

    assert_eq!(result.unwrap().tax, dec!(1670.00));
    assert!(output.contains("Filing Status: Married filing jointly\n"));
    assert!(output.contains("Marginal Rate: 10%  Effective Rate: 10%\n"));
}

#[test]
fn session_fails_when_input_ends_early() {
    let (result, output) = session("0\n", false);

    assert!(result.is_err());
    assert!(!output.contains("Total Tax Owed"));
}
