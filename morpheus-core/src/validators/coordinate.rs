//! Coordinate validator with a fixed-precision gate
//!
//! Validates one axis of a WGS84 coordinate, given as decimal text:
//! - Exponential notation is rejected outright, whatever its precision
//! - Exactly six fractional digits, no more, no fewer
//! - Canonical range for the axis

use crate::{
    constants::geo::{LAT_MAX_DEG, LAT_MIN_DEG, LNG_MAX_DEG, LNG_MIN_DEG, REQUIRED_FRACTION_DIGITS},
    errors::{Axis, ValidationError, ValidationResult},
    traits::{Validatable, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for a single latitude or longitude
#[derive(Debug, Clone)]
pub struct CoordinateValidator {
    axis: Axis,
    min_deg: f64,
    max_deg: f64,
    fraction_digits: usize,
}

impl CoordinateValidator {
    /// Latitude in [-90, 90]
    pub fn latitude() -> Self {
        Self {
            axis: Axis::Latitude,
            min_deg: LAT_MIN_DEG,
            max_deg: LAT_MAX_DEG,
            fraction_digits: REQUIRED_FRACTION_DIGITS,
        }
    }

    /// Longitude in [-180, 180]
    pub fn longitude() -> Self {
        Self {
            axis: Axis::Longitude,
            min_deg: LNG_MIN_DEG,
            max_deg: LNG_MAX_DEG,
            fraction_digits: REQUIRED_FRACTION_DIGITS,
        }
    }

    /// Axis this validator checks
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Validate `text` and return the parsed degrees
    pub fn parse(&self, text: &str) -> ValidationResult<f64> {
        // Exponent first: "5.137100e1" has six digits but is still rejected
        if utils::is_exponential(text) {
            return Err(ValidationError::ExponentNotation { axis: self.axis });
        }

        let digits = utils::fraction_digits(text).ok_or_else(|| ValidationError::MalformedNumber {
            axis: self.axis,
            text: text.to_owned(),
        })?;

        if digits != self.fraction_digits {
            return Err(ValidationError::PrecisionViolation {
                axis: self.axis,
                digits,
                required: self.fraction_digits,
            });
        }

        let value: f64 = text.parse().map_err(|_| ValidationError::MalformedNumber {
            axis: self.axis,
            text: text.to_owned(),
        })?;
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(self.axis, value, self.min_deg, self.max_deg)?;
        Ok(value)
    }

    /// Validate a numeric value by its shortest round-trip decimal form
    pub fn parse_degrees(&self, value: f64) -> ValidationResult<f64> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }
        match utils::plain_decimal_text(value) {
            Some(text) => self.parse(&text),
            None => Err(ValidationError::ExponentNotation { axis: self.axis }),
        }
    }
}

impl Validator for CoordinateValidator {
    type Value = str;

    fn validate(&self, value: &str) -> ValidationResult<()> {
        self.parse(value).map(|_| ())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_deg,
            max_value: self.max_deg,
            fraction_digits: Some(self.fraction_digits),
        }
    }
}

/// Validate a latitude/longitude pair given as decimal text
///
/// Returns `true` only when both values are in range, carry exactly six
/// fractional digits, and neither is written in exponential notation.
pub fn validate_coordinate(lat: &str, lng: &str) -> bool {
    CoordinateValidator::latitude().validate(lat).is_ok()
        && CoordinateValidator::longitude().validate(lng).is_ok()
}
