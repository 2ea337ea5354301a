//! Numeric fallback helpers shared by every derivation.
//!
//! The engine never fails on bad numbers: a non-finite value is replaced by a
//! documented fallback before it is used and again before it is returned.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Returns `value` when it is finite, otherwise `fallback`.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::finite_or;
///
/// assert_eq!(finite_or(12.5, 0.0), 12.5);
/// assert_eq!(finite_or(f64::NAN, 0.0), 0.0);
/// assert_eq!(finite_or(f64::INFINITY, 47.0), 47.0);
/// ```
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Reads a loosely typed JSON value as a finite number.
///
/// Numbers and numeric strings are accepted. Null, booleans, containers,
/// unparseable strings and non-finite results all read as zero.
pub(crate) fn lenient_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    finite_or(number, 0.0)
}

/// Divides, returning zero instead of an infinity or NaN.
///
/// Callers guard the divisor with their own condition; this only catches
/// what slips through (overflow, NaN operands).
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    finite_or(numerator / denominator, 0.0)
}

/// Converts an engine figure to a display [`Decimal`] with `dp` places.
///
/// Midpoints round away from zero, as currency displays do, and the result
/// always carries exactly `dp` places. Non-finite or out-of-range values
/// become zero.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::rounded;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(rounded(233.36666666666667, 2), Decimal::from_str("233.37").unwrap());
/// assert_eq!(rounded(f64::NAN, 2), Decimal::ZERO);
/// ```
pub fn rounded(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(finite_or(value, 0.0))
        .map(|d| {
            let mut display = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            display.rescale(dp);
            display
        })
        .unwrap_or(Decimal::ZERO)
}
