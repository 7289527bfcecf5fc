use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. XOF = 0, EUR = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Formats a number the way the dashboard displays it: French grouping
/// (narrow no-break space) and ',' as decimal mark.
pub(crate) fn format_number(value: f64, decimal_places: usize) -> String {
    let rounded = format!("{:.decimal_places$}", value.abs());
    // No "-0,00".
    let sign = if value < 0.0 && rounded.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    let (integer_part, fractional_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };
    let grouped = integer_part
        .parse::<u64>()
        .map(|i| i.to_formatted_string(&Locale::fr))
        .unwrap_or_else(|_| integer_part.to_string());
    match fractional_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a cash amount with the currency's number of decimal places and
/// symbol (ex. `1 500 000 CFA`, `12,50 €`).
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    format!(
        "{} {}",
        format_number(amount, decimal_places(currency)),
        currency.symbol()
    )
}
