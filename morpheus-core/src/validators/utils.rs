//! Shared helpers for the validators
//!
//! Pure functions only. Everything here works on the decimal text of a
//! number, since precision is a property of how a coordinate was written,
//! not of the `f64` it parses to.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::geo::MIN_PLAIN_DECIMAL_MAGNITUDE,
    errors::{Axis, ValidationError, ValidationResult},
};

static EXPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)[eE][+-]?\d+$").expect("valid exponent regex")
});

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(?:\.(\d*))?$").expect("valid decimal regex"));

/// Check if a value is within the specified range
pub fn check_range(axis: Axis, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::CoordinateOutOfRange { axis, value, min, max })
    } else {
        Ok(())
    }
}

/// True when `text` is a number in exponential notation (`5.1e1`, `1E-7`)
pub fn is_exponential(text: &str) -> bool {
    EXPONENT_RE.is_match(text)
}

/// Number of fractional digits of a plain decimal, `None` if `text` is not one
///
/// `"51"` and `"51."` both have zero fractional digits.
pub fn fraction_digits(text: &str) -> Option<usize> {
    DECIMAL_RE
        .captures(text)
        .map(|caps| caps.get(1).map_or(0, |frac| frac.as_str().len()))
}

/// Shortest round-trip decimal text of `value`
///
/// Non-zero magnitudes below 1e-6 come back as `None`: their shortest form is
/// exponential, which the precision gate always rejects.
pub fn plain_decimal_text(value: f64) -> Option<String> {
    if value != 0.0 && value.abs() < MIN_PLAIN_DECIMAL_MAGNITUDE {
        return None;
    }
    Some(format!("{}", value))
}
