//! Core traits for validators and level feeds
//!
//! These traits are the seams of the crate. Keep them small.

use crate::errors::ValidationResult;
use crate::model::MeasurementPoint;

/// Core validator trait - implement this for each kind of input
pub trait Validator {
    /// The type of value this validator handles
    type Value: ?Sized;

    /// Validate a single value
    fn validate(&self, value: &Self::Value) -> ValidationResult<()>;

    /// Get the constraints this validator enforces
    fn constraints(&self) -> ValidatorConstraints;
}

/// Constraints enforced by a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value
    pub min_value: f64,

    /// Maximum valid value
    pub max_value: f64,

    /// Exact number of fractional digits required, if any
    pub fraction_digits: Option<usize>,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Source of the next level for a measurement point
///
/// The refresh pass asks a feed for one new level per point. The only feed
/// in this crate is [`SampleSimulator`](crate::simulate::SampleSimulator),
/// which invents levels; a sensor ingestion path would be a separate
/// implementation.
pub trait LevelFeed {
    /// Next level (dB) for `point`
    fn next_level(&mut self, point: &MeasurementPoint) -> f64;

    /// True when levels are synthetic rather than measured
    fn is_simulated(&self) -> bool;
}

impl<F: LevelFeed + ?Sized> LevelFeed for &mut F {
    fn next_level(&mut self, point: &MeasurementPoint) -> f64 {
        (**self).next_level(point)
    }

    fn is_simulated(&self) -> bool {
        (**self).is_simulated()
    }
}
