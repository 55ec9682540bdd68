//! Time sources for the refresh loop
//!
//! The refresh timer and the level history both read time through
//! [`TimeSource`], so tests can drive a whole session with [`FixedTime`]
//! while a live dashboard uses [`SystemTime`].

/// Timestamp in milliseconds since the Unix epoch (or an arbitrary origin for test clocks)
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs a test clock)
    fn is_wall_clock(&self) -> bool;
}

/// Wall clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Manually advanced time source for tests and replays
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}

/// Hour of day (0..24, UTC) for a wall-clock timestamp
pub fn hour_of_day(timestamp: Timestamp) -> u8 {
    use crate::constants::time::MS_PER_HOUR;

    ((timestamp / MS_PER_HOUR) % 24) as u8
}
