//! Numeric values and their canonical textual form.
//!
//! Integer literals are kept as exact decimal digit strings, so values beyond
//! the range of any machine integer survive unchanged. Literals with a
//! fraction or an exponent are read as the nearest double and written back
//! as the shortest digit string that round-trips:
//!
//! - decimal exponent in `-4..16`: fixed notation with at least one
//!   fractional digit (`1.0`, `0.0001`, `1000000000000000.0`)
//! - otherwise scientific notation with a signed, two-digit minimum exponent
//!   (`1e+16`, `1.5e-07`)
//!
//! This is the same form Python's `json.dumps` produces, which keeps the
//! output byte-compatible with consumers built on it.

use crate::error::{CanonicalError, Result};
use std::fmt;

/// Exponent range rendered in fixed notation.
const FIXED_EXPONENT_RANGE: std::ops::Range<i32> = -4..16;

/// A JSON number.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An integer literal: optional `-` followed by digits without leading
    /// zeros. Never `-0`.
    Integer(String),

    /// A literal that carried a fraction or an exponent. Always finite.
    Float(f64),
}

impl Number {
    /// Classifies a JSON number literal.
    ///
    /// Fails with [`CanonicalError::NumberOutOfRange`] when a fractional or
    /// exponent literal overflows a double.
    pub fn from_literal(literal: &str) -> Result<Self> {
        if literal.contains(['.', 'e', 'E']) {
            let value: f64 = literal.parse().map_err(|_| invalid_literal(literal))?;
            return Number::from_f64(value).ok_or_else(|| CanonicalError::NumberOutOfRange {
                number: literal.to_string(),
            });
        }

        let (negative, digits) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_literal(literal));
        }

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Number::Integer("0".to_string()));
        }

        let mut text = String::with_capacity(digits.len() + 1);
        if negative {
            text.push('-');
        }
        text.push_str(digits);
        Ok(Number::Integer(text))
    }

    /// Creates a float number, or `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(Number::Float(value))
    }

    /// Returns true if this number came from an integer literal.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns the value as an `f64`, rounding large integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(digits) => digits.parse().unwrap_or(f64::NAN),
            Number::Float(value) => *value,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value.to_string())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Integer(value.to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(digits) => f.write_str(digits),
            Number::Float(value) => f.write_str(&format_float(*value)),
        }
    }
}

fn invalid_literal(literal: &str) -> CanonicalError {
    CanonicalError::Parse {
        message: format!("invalid number literal '{}'", literal),
        line: 0,
        column: 0,
    }
}

/// Splits a finite, non-negative double into its shortest round-trip digits
/// and decimal exponent, so that `value = d.ddd * 10^exponent`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` without a precision prints the shortest round-trip mantissa.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Formats a finite double in canonical form.
fn format_float(value: f64) -> String {
    let (digits, exponent) = shortest_digits(value.abs());
    let mut out = String::with_capacity(digits.len() + 8);
    if value.is_sign_negative() {
        out.push('-');
    }

    if FIXED_EXPONENT_RANGE.contains(&exponent) {
        // Number of digits in front of the decimal point.
        let point = exponent + 1;
        if point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
            out.push_str(&digits);
        } else {
            let point = point as usize;
            if point >= digits.len() {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(point - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..point]);
                out.push('.');
                out.push_str(&digits[point..]);
            }
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    }

    out
}
