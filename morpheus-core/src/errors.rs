//! Error Types for Validation and Configuration Failures
//!
//! ## Error Categories
//!
//! Errors fall into three categories, each with its own recovery policy:
//!
//! ### Coordinate Violations (recovered locally)
//! - `CoordinateOutOfRange`: latitude outside [-90, 90] or longitude outside [-180, 180]
//! - `PrecisionViolation`: value does not carry exactly six fractional digits
//! - `ExponentNotation`: value written as `5.1e1`; rejected regardless of precision
//! - `MalformedNumber`: text is not a decimal number at all
//!
//! A measurement point with a coordinate violation is skipped; a route with a
//! single bad waypoint is not rendered at all.
//!
//! ### Configuration Errors (fatal for the affected zone)
//! - `InvalidLimit`: a zone limit of zero, below zero, or not finite
//!
//! ### Value Errors
//! - `InvalidValue`: level is NaN or infinite
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use morpheus_core::{ValidationError, GeoPoint};
//!
//! match GeoPoint::parse("91.000000", "7.693150") {
//!     Ok(point) => {
//!         // hand the point to the map layer
//!         # let _ = point;
//!     }
//!     Err(ValidationError::CoordinateOutOfRange { .. }) => {
//!         // seed data is wrong, skip this point
//!     }
//!     Err(ValidationError::PrecisionViolation { .. })
//!     | Err(ValidationError::ExponentNotation { .. }) => {
//!         // data-quality gate, skip this point
//!     }
//!     Err(_) => {}
//! }
//! ```

use core::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Which half of a coordinate pair failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Validation and configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Coordinate outside geographic bounds
    #[error("{axis} {value} outside range [{min}, {max}]")]
    CoordinateOutOfRange {
        /// Offending axis
        axis: Axis,
        /// Parsed value
        value: f64,
        /// Lower bound for the axis
        min: f64,
        /// Upper bound for the axis
        max: f64,
    },

    /// Coordinate does not carry the required number of fractional digits
    #[error("{axis} has {digits} fractional digits, expected {required}")]
    PrecisionViolation {
        /// Offending axis
        axis: Axis,
        /// Number of fractional digits found
        digits: usize,
        /// Number of fractional digits required
        required: usize,
    },

    /// Coordinate written in exponential notation
    #[error("{axis} uses exponential notation")]
    ExponentNotation {
        /// Offending axis
        axis: Axis,
    },

    /// Text is not a plain decimal number
    #[error("{axis} is not a decimal number: {text:?}")]
    MalformedNumber {
        /// Offending axis
        axis: Axis,
        /// The rejected text
        text: String,
    },

    /// Zone limit of zero, below zero, or not finite
    #[error("invalid {period} limit {limit} dB for zone {zone}")]
    InvalidLimit {
        /// Zone identifier
        zone: &'static str,
        /// Which limit was rejected ("day" or "night")
        period: &'static str,
        /// The rejected value
        limit: f64,
    },

    /// Level makes no physical sense (NaN, infinity)
    #[error("invalid value: not a finite number")]
    InvalidValue,

    /// Propagation geometry cannot be evaluated (empty box, zero grid step)
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        reason: &'static str,
    },
}

impl ValidationError {
    /// True for errors that only exclude a point or waypoint from rendering
    pub fn is_coordinate_error(&self) -> bool {
        matches!(
            self,
            Self::CoordinateOutOfRange { .. }
                | Self::PrecisionViolation { .. }
                | Self::ExponentNotation { .. }
                | Self::MalformedNumber { .. }
        )
    }
}
