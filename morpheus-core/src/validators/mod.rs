//! Input Validators
//!
//! ## Overview
//!
//! Every coordinate that reaches the map layer passes through
//! [`CoordinateValidator`]. The check is a data-quality gate as much as a
//! range check: a coordinate must be written with exactly six fractional
//! digits, so map calls never receive ambiguous precision.
//!
//! ## Validation Layers
//!
//! ### 1. Notation
//! Exponential notation (`5.137109e1`) is always rejected, even when the
//! mantissa happens to have six digits.
//!
//! ### 2. Precision
//! ```rust
//! use morpheus_core::validators::validate_coordinate;
//!
//! assert!(validate_coordinate("51.371099", "7.693150"));
//! assert!(!validate_coordinate("51.371", "7.693"));         // too few
//! assert!(!validate_coordinate("51.3710990", "7.6931500")); // too many
//! ```
//!
//! ### 3. Range
//! Latitude in [-90, 90], longitude in [-180, 180], both inclusive.
//!
//! ## Recovery
//!
//! Validation never aborts a refresh. Callers skip an invalid measurement
//! point and keep the rest; a route with one invalid waypoint is not drawn
//! at all, since a polyline with a hole would misrepresent the flight path.

mod coordinate;
mod utils;

pub use coordinate::{validate_coordinate, CoordinateValidator};
