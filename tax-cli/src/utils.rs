use rust_decimal::Decimal;
use tax_core::calculations::common::{round_half_up, round_to};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid decimal '{input}'")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// dollar sign and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    unsigned.trim_start().replace(',', "")
}

/// Parses a user-entered amount into a [`Decimal`].
///
/// Accepts `$` prefixes, comma thousands separators (e.g. `"$1,234.56"`)
/// and scientific notation (`"1e5"`). Unlike a blank form field, blank input
/// here is an error.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    normalized
        .parse::<Decimal>()
        .or_else(|e| {
            if normalized.contains(['e', 'E']) {
                Decimal::from_scientific(&normalized.to_ascii_lowercase())
            } else {
                Err(e)
            }
        })
        .map_err(|e| {
            tracing::debug!(input = %s, "invalid decimal: {}", e);
            ParseDecimalError::Invalid {
                input: s.to_string(),
                source: e,
            }
        })
}

/// Formats an amount as US currency: `$` prefix, comma thousands separators
/// and exactly two decimal places.
pub fn format_currency(value: Decimal) -> String {
    let mut cents = round_half_up(value.abs());
    cents.rescale(2);
    let text = cents.to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac}")
}

/// Formats a rate such as `0.1471` as a percentage (`14.71%`).
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", round_to(rate * Decimal::ONE_HUNDRED, 2).normalize())
}
