//! Operand parsing and result formatting.
//!
//! Operands travel through the engine as display strings. Parsing is
//! lenient: the longest numeric prefix wins, so a formatted result that
//! was shortened with backspace (`"1.5e+"`) still evaluates (`1.5`).
//!
//! Formatting either renders exponential notation with six fractional
//! digits (huge or tiny magnitudes) or rounds to eight decimal places to
//! hide binary floating-point noise (`0.1 + 0.2` renders `0.3`).

use crate::error::CalcResult;

/// Text rendered for the error sentinel.
pub const ERROR_SENTINEL: &str = "Error";

/// Magnitudes above this render in exponential notation.
pub const EXPONENTIAL_ABOVE: f64 = 999_999_999.0;

/// Nonzero magnitudes below this render in exponential notation.
pub const EXPONENTIAL_BELOW: f64 = 0.000_001;

/// Fractional digits kept by plain rendering.
const ROUNDING_SCALE: f64 = 100_000_000.0;

/// Fractional digits of the exponential mantissa.
const EXPONENTIAL_DIGITS: usize = 6;

/// Parses an operand string into a number.
///
/// Returns NaN when the string has no numeric prefix at all.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when it carries at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number for the display.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = value.abs();
    if magnitude > EXPONENTIAL_ABOVE {
        return to_exponential(value);
    }
    if value != 0.0 && magnitude < EXPONENTIAL_BELOW {
        let exponential = to_exponential(value);
        // A mantissa rounded up to 1.000000e-6 belongs to the plain range.
        if parse_operand(&exponential).abs() < EXPONENTIAL_BELOW {
            return exponential;
        }
    }

    let rounded = round_half_up(value * ROUNDING_SCALE) / ROUNDING_SCALE;
    if rounded == 0.0 {
        // Collapses -0.
        return "0".to_owned();
    }
    format!("{rounded}")
}

/// Formats an evaluation outcome, passing the error sentinel through.
#[must_use]
pub fn format_outcome(outcome: CalcResult<f64>) -> String {
    match outcome {
        Ok(value) => format_number(value),
        Err(_) => ERROR_SENTINEL.to_owned(),
    }
}

/// Re-formats an already rendered display string.
///
/// The sentinel passes through unchanged.
#[must_use]
pub fn reformat(text: &str) -> String {
    if text == ERROR_SENTINEL {
        return text.to_owned();
    }
    format_number(parse_operand(text))
}

/// Rounds to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Exponential notation with a signed exponent (`1.234568e+9`).
fn to_exponential(value: f64) -> String {
    let raw = format!("{:.*e}", EXPONENTIAL_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{mantissa}e{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => raw,
    }
}
