//! Price formatting
//!
//! Fixed locale convention: `.` groups thousands, `,` separates decimals.
//! BTC amounts use 8 decimal places, everything else 2.

use crate::constants::{BTC_CURRENCY, BTC_DECIMALS, FIAT_DECIMALS};

/// Formats an amount for display in the given currency
///
/// ```
/// use bitcoinaverage_sdk::format_price;
///
/// assert_eq!(format_price(1234.5, "BTC"), "1.234,50000000");
/// assert_eq!(format_price(1234.5, "EUR"), "1.234,50");
/// ```
pub fn format_price(amount: f64, currency: &str) -> String {
    let decimals = if currency == BTC_CURRENCY {
        BTC_DECIMALS
    } else {
        FIAT_DECIMALS
    };

    format_number(amount, decimals, ',', '.')
}

/// Significant digits kept when cleaning up binary noise
const SIGNIFICANT_DIGITS: usize = 15;

/// Scaled values at or above this have no fractional noise left to clean up
const PRE_ROUND_LIMIT: f64 = 1e15;

/// Rounds `value` to `digits` significant decimal digits
fn round_significant(value: f64, digits: usize) -> f64 {
    format!("{:.*e}", digits.saturating_sub(1), value)
        .parse()
        .unwrap_or(value)
}

/// Renders an amount for a URL query
///
/// Keeps 14 significant digits so `0.1 + 0.2` renders as `0.3`, then uses the
/// shortest decimal form (`1`, `2.5`).
pub(crate) fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    round_significant(amount, 14).to_string()
}

/// Formats `amount` with a fixed number of decimals and grouped thousands
///
/// Ties round half away from zero. `1.005` is stored as `1.00499999...`, so
/// the scaled value is first cut to 15 significant digits to recover the
/// decimal the caller wrote.
fn format_number(amount: f64, decimals: usize, decimal_sep: char, thousands_sep: char) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let mut scaled = amount.abs() * 10f64.powi(decimals as i32);
    if scaled < PRE_ROUND_LIMIT {
        scaled = round_significant(scaled, SIGNIFICANT_DIGITS);
    }
    let units = scaled.round();

    // Integer digits of the scaled value, padded so there is at least one
    // digit before the decimal point
    let mut digits = format!("{:.0}", units);
    if digits.len() <= decimals {
        digits = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 2);

    // Drop the sign when the value rounds to zero
    if amount.is_sign_negative() && units != 0.0 {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(thousands_sep);
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push(decimal_sep);
        out.push_str(frac_part);
    }

    out
}
