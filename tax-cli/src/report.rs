//! Plain-text rendering of computed tax results.

use std::fmt::Write;

use tax_core::{BracketSlice, FilingStatus, TaxBreakdown};

use crate::utils::{format_currency, format_percent};

const RULE_WIDTH: usize = 40;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Renders the filing status menu shown before prompting.
pub fn render_menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tax Calculator");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Filing Status:");
    for status in FilingStatus::ALL {
        let label = match status {
            FilingStatus::MarriedJointly => "Married filing jointly or qualified widow(er)",
            other => other.name(),
        };
        let _ = writeln!(out, "{} - {}", status.code(), label);
    }
    let _ = writeln!(out, "{}", rule('-'));
    out
}

/// Renders the result block for a computed tax.
///
/// With `show_brackets` set, each taxed bracket slice is listed along with
/// the marginal and effective rates.
pub fn render_report(
    result: &TaxBreakdown,
    show_brackets: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Filing Status: {}", result.status);
    let _ = writeln!(out, "Taxable Income: {}", format_currency(result.income));

    if show_brackets {
        let _ = writeln!(out);
        for slice in &result.slices {
            let _ = writeln!(out, "  {}", render_slice(slice));
        }
        let _ = writeln!(
            out,
            "Marginal Rate: {}  Effective Rate: {}",
            format_percent(result.marginal_rate),
            format_percent(result.effective_rate)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total Tax Owed: {}", format_currency(result.tax));
    let _ = writeln!(out, "{}", rule('='));
    out
}

fn render_slice(slice: &BracketSlice) -> String {
    let range = match slice.upper {
        Some(upper) => format!(
            "{} - {}",
            format_currency(slice.lower),
            format_currency(upper)
        ),
        None => format!("over {}", format_currency(slice.lower)),
    };
    format!(
        "{:>5} of {} ({}) = {}",
        format_percent(slice.rate),
        format_currency(slice.taxed_amount),
        range,
        format_currency(slice.tax)
    )
}
