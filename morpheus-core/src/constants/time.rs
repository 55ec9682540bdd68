//! Time-Related Constants

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * 60;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * 60;

/// Hours kept by the rolling average.
pub const HOURS_PER_DAY: usize = 24;

// ===== REFRESH =====

/// Default dashboard refresh interval (milliseconds).
///
/// The dashboard redraws every few seconds; five keeps the map lively
/// without the table flickering.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;

// ===== DAY / NIGHT (TA Lärm 6.4) =====

/// First hour of the day period (06:00).
pub const DAY_START_HOUR: u8 = 6;

/// First hour of the night period (22:00).
pub const NIGHT_START_HOUR: u8 = 22;
