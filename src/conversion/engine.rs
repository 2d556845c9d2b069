//! Category-dispatched unit conversion.
//!
//! [`convert`] is total: it never fails and never panics. Linear categories
//! compose through the base unit (`value * from / to`); temperature uses direct
//! pairwise formulas. Units unknown to the category degrade instead of erroring:
//! linear categories yield `0.0`, temperature yields the value unchanged.

use super::catalog::{self, Strategy};
use crate::domain::Category;

/// Number of digits after the decimal point in formatted results.
pub const RESULT_PRECISION: usize = 4;

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Converts `value` from `from_unit` to `to_unit` within `category`.
///
/// Identical units return `value` exactly, without a floating-point round trip.
///
/// # Examples
///
/// ```rust
/// use unit_converter::conversion::convert;
/// use unit_converter::domain::Category;
///
/// assert_eq!(convert(1.0, "Hour", "Minute", Category::Time), 60.0);
/// assert_eq!(convert(0.0, "Celsius", "Fahrenheit", Category::Temperature), 32.0);
/// assert_eq!(convert(5.0, "Meter", "Bogus", Category::Length), 0.0);
/// ```
#[must_use]
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: Category) -> f64 {
    if from_unit == to_unit {
        return value;
    }

    let converted = match category.strategy() {
        Strategy::Linear(factors) => convert_with_factors(value, from_unit, to_unit, factors),
        Strategy::Formula => convert_temperature(value, from_unit, to_unit),
    };

    tracing::trace!(
        category = %category,
        from_unit,
        to_unit,
        value,
        converted,
        "converted value"
    );

    converted
}

fn convert_with_factors(value: f64, from_unit: &str, to_unit: &str, factors: &[(&str, f64)]) -> f64 {
    let (Some(from_factor), Some(to_factor)) = (
        catalog::lookup(factors, from_unit),
        catalog::lookup(factors, to_unit),
    ) else {
        tracing::warn!(from_unit, to_unit, "unit not recognized for category, yielding 0");
        return 0.0;
    };

    value * from_factor / to_factor
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match (from_unit, to_unit) {
        ("Celsius", "Fahrenheit") => value * 9.0 / 5.0 + 32.0,
        ("Celsius", "Kelvin") => value + KELVIN_OFFSET,
        ("Fahrenheit", "Celsius") => (value - 32.0) * 5.0 / 9.0,
        ("Fahrenheit", "Kelvin") => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        ("Kelvin", "Celsius") => value - KELVIN_OFFSET,
        ("Kelvin", "Fahrenheit") => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        _ => {
            tracing::warn!(from_unit, to_unit, "temperature pair not recognized, value unchanged");
            value
        }
    }
}

/// Parses user-typed text as a number.
///
/// Surrounding whitespace is ignored. Infinities and NaN are only accepted in
/// the spellings [`format_result`] produces (`Infinity`, `-Infinity`, `NaN`),
/// never as `inf` or `nan`.
///
/// ```rust
/// use unit_converter::conversion::parse_value;
///
/// assert_eq!(parse_value(" 2.5 "), Some(2.5));
/// assert_eq!(parse_value("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_value("inf"), None);
/// assert_eq!(parse_value("ten"), None);
/// ```
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() {
        return Some(value);
    }

    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    matches!(unsigned, "Infinity" | "NaN").then_some(value)
}

/// Formats a converted value with exactly four fractional digits.
///
/// Rounding is half-up on the shortest decimal form of `value`, so a value
/// typed as `2.00005` shows as `2.0001` even though the nearest `f64` lies
/// just below the tie. Non-finite values print as `Infinity`, `-Infinity` and
/// `NaN`.
///
/// ```rust
/// use unit_converter::conversion::format_result;
///
/// assert_eq!(format_result(1.0), "1.0000");
/// assert_eq!(format_result(2.204_622_6), "2.2046");
/// assert_eq!(format_result(2.000_05), "2.0001");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        let spelled = match value {
            v if v.is_nan() => "NaN",
            v if v > 0.0 => "Infinity",
            _ => "-Infinity",
        };
        return spelled.to_string();
    }

    let mut text: String = round_half_up(value.abs())
        .into_iter()
        .map(|digit| char::from(b'0' + digit))
        .collect();
    if text.len() <= RESULT_PRECISION {
        text = format!("{text:0>width$}", width = RESULT_PRECISION + 1);
    }
    text.insert(text.len() - RESULT_PRECISION, '.');
    if value.is_sign_negative() {
        text.insert(0, '-');
    }
    text
}

/// Digits of `magnitude * 10^RESULT_PRECISION`, rounded half-up from the
/// shortest round-trip representation. Empty when the value rounds to zero.
fn round_half_up(magnitude: f64) -> Vec<u8> {
    // `{:e}` yields the shortest digits that parse back to the same f64.
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let Ok(keep) = usize::try_from(exponent + 1 + RESULT_PRECISION as i32) else {
        return Vec::new();
    };

    let round_up = digits.get(keep).is_some_and(|&digit| digit >= 5);
    digits.resize(keep, 0);

    if round_up {
        match digits.iter().rposition(|&digit| digit < 9) {
            Some(pos) => {
                digits[pos] += 1;
                digits[pos + 1..].fill(0);
            }
            None => {
                digits.fill(0);
                digits.insert(0, 1);
            }
        }
    }

    let leading_zeros = digits.iter().take_while(|&&digit| digit == 0).count();
    digits.drain(..leading_zeros);
    digits
}
