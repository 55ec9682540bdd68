//! Geographic Bounds and Precision

/// Southernmost valid latitude (degrees).
pub const LAT_MIN_DEG: f64 = -90.0;

/// Northernmost valid latitude (degrees).
pub const LAT_MAX_DEG: f64 = 90.0;

/// Westernmost valid longitude (degrees).
pub const LNG_MIN_DEG: f64 = -180.0;

/// Easternmost valid longitude (degrees).
pub const LNG_MAX_DEG: f64 = 180.0;

/// Fractional digits every coordinate must carry.
///
/// Six decimals resolve roughly 0.11 m at the equator. Map calls only ever
/// receive coordinates at this precision.
pub const REQUIRED_FRACTION_DIGITS: usize = 6;

/// Smallest non-zero magnitude written without an exponent.
///
/// Shortest round-trip formatting switches to exponential notation below
/// this, so a numeric coordinate smaller than it counts as exponential.
pub const MIN_PLAIN_DECIMAL_MAGNITUDE: f64 = 1e-6;

/// Mean Earth radius (metres), IUGG value.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
