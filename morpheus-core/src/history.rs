//! Rolling 24-hour level history
//!
//! ## Overview
//!
//! The dashboard shows a 24-hour average next to the live level. Keeping
//! every five-second sample for a day would mean ~17k values per point, so
//! the history keeps one energetic mean per hour instead:
//!
//! ```text
//! completed hours (ring, oldest overwritten)       running hour
//! ┌─────┬─────┬─────┬─── ─ ─ ───┬─────┐            ┌──────────────┐
//! │ h-23│ h-22│ h-21│    ...    │ h-1 │            │ Σ10^(L/10), n│
//! └─────┴─────┴─────┴─── ─ ─ ───┴─────┘            └──────────────┘
//! ```
//!
//! Sound levels are logarithmic, so averages are energetic (Leq):
//! `10·log10(mean(10^(L/10)))`. An arithmetic mean of dB values would
//! understate short loud events.
//!
//! Hours with no samples are not stored; the average covers the hours that
//! actually had data within the window.

use heapless::HistoryBuffer;

use crate::{
    acoustics::{db_to_energy, energy_to_db},
    constants::time::{HOURS_PER_DAY, MS_PER_HOUR},
    time::Timestamp,
};

/// Completed hours kept alongside the running hour
const COMPLETED_HOURS: usize = HOURS_PER_DAY - 1;

/// Energy accumulator for the hour in progress
#[derive(Debug, Clone, Copy)]
struct HourBucket {
    hour: u64,
    energy_sum: f64,
    samples: u32,
}

impl HourBucket {
    fn leq_db(&self) -> Option<f64> {
        (self.samples > 0).then(|| energy_to_db(self.energy_sum / self.samples as f64))
    }
}

/// Hourly Leq ring plus the running hour
#[derive(Debug, Clone)]
pub struct LevelHistory {
    hours: HistoryBuffer<f64, COMPLETED_HOURS>,
    current: Option<HourBucket>,
}

impl Default for LevelHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelHistory {
    pub fn new() -> Self {
        Self {
            hours: HistoryBuffer::new(),
            current: None,
        }
    }

    /// History seeded with a prior average, counted as one completed hour
    pub fn with_baseline(average_db: f64) -> Self {
        let mut history = Self::new();
        history.hours.write(average_db);
        history
    }

    /// Record a sample taken at `timestamp`
    pub fn record(&mut self, level_db: f64, timestamp: Timestamp) {
        let hour = timestamp / MS_PER_HOUR;

        match &mut self.current {
            Some(bucket) if bucket.hour == hour => {
                bucket.energy_sum += db_to_energy(level_db);
                bucket.samples += 1;
                return;
            }
            Some(bucket) if hour > bucket.hour => {
                if let Some(leq) = bucket.leq_db() {
                    self.hours.write(leq);
                }
            }
            // Clock went backwards: keep accumulating into the open bucket
            Some(bucket) => {
                bucket.energy_sum += db_to_energy(level_db);
                bucket.samples += 1;
                return;
            }
            None => {}
        }

        self.current = Some(HourBucket {
            hour,
            energy_sum: db_to_energy(level_db),
            samples: 1,
        });
    }

    /// Energetic mean over the window, `None` before the first sample
    pub fn average_db(&self) -> Option<f64> {
        let running = self.current.and_then(|b| b.leq_db());
        let count = self.hours.len() + usize::from(running.is_some());
        if count == 0 {
            return None;
        }

        let energy: f64 = self
            .hours
            .as_slice()
            .iter()
            .copied()
            .chain(running)
            .map(db_to_energy)
            .sum();
        Some(energy_to_db(energy / count as f64))
    }

    /// Number of hours contributing to the average
    pub fn hours_covered(&self) -> usize {
        self.hours.len() + usize::from(self.current.map_or(false, |b| b.samples > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: u64 = MS_PER_HOUR;

    #[test]
    fn empty_history_has_no_average() {
        let history = LevelHistory::new();
        assert_eq!(history.average_db(), None);
        assert_eq!(history.hours_covered(), 0);
    }

    #[test]
    fn constant_level_averages_to_itself() {
        let mut history = LevelHistory::new();
        for i in 0..10 {
            history.record(50.0, i * 5_000);
        }
        let avg = history.average_db().unwrap();
        assert!((avg - 50.0).abs() < 1e-9);
    }

    #[test]
    fn energetic_mean_favours_loud_samples() {
        let mut history = LevelHistory::new();
        history.record(40.0, 0);
        history.record(60.0, 1_000);
        let avg = history.average_db().unwrap();
        // arithmetic mean would be 50; energetic mean is ~57
        assert!(avg > 56.9 && avg < 57.1, "got {avg}");
    }

    #[test]
    fn window_keeps_twenty_four_hours() {
        let mut history = LevelHistory::new();
        for h in 0..30 {
            history.record(if h < 6 { 80.0 } else { 45.0 }, h * HOUR);
        }
        // hours 0..6 at 80 dB have rolled out of the window
        assert_eq!(history.hours_covered(), 24);
        let avg = history.average_db().unwrap();
        assert!((avg - 45.0).abs() < 1e-9, "got {avg}");
    }

    #[test]
    fn baseline_counts_as_an_hour() {
        let mut history = LevelHistory::with_baseline(50.0);
        assert_eq!(history.hours_covered(), 1);
        history.record(50.0, 0);
        assert!((history.average_db().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn backwards_clock_stays_in_open_hour() {
        let mut history = LevelHistory::new();
        history.record(50.0, 5 * HOUR);
        history.record(50.0, 4 * HOUR);
        assert_eq!(history.hours_covered(), 1);
    }
}
