//! Constants for MORPHEUS Core
//!
//! Centralized numeric values used throughout the crate, grouped by domain:
//! - **Geo**: coordinate bounds and the precision gate
//! - **Acoustics**: classifier thresholds, simulator bounds, propagation terms
//! - **Time**: refresh interval and day/night periods
//!
//! Names carry their units. Add new values here rather than inline.

/// Geographic bounds and coordinate precision.
pub mod geo;

/// Sound levels, thresholds and propagation parameters.
pub mod acoustics;

/// Time intervals and day/night period boundaries.
pub mod time;

// Re-export commonly used constants for convenience
pub use geo::{LAT_MAX_DEG, LAT_MIN_DEG, LNG_MAX_DEG, LNG_MIN_DEG, REQUIRED_FRACTION_DIGITS};

pub use acoustics::{
    CRITICAL_UTILIZATION, SIM_CEILING_DB, SIM_FLOOR_DB, SIM_STEP_DB, WARNING_UTILIZATION,
};

pub use time::{DAY_START_HOUR, DEFAULT_REFRESH_INTERVAL_MS, MS_PER_HOUR, NIGHT_START_HOUR};
