//! Cooperative refresh timer
//!
//! The host loop calls [`RefreshTimer::poll`] as often as it likes; a pass
//! runs only once the interval has elapsed. Missed intervals are not caught
//! up: after a long stall the next poll runs a single pass and the schedule
//! restarts from that moment.

use log::info;

use crate::{
    constants::DEFAULT_REFRESH_INTERVAL_MS,
    dashboard::Dashboard,
    time::{TimeSource, Timestamp},
    traits::LevelFeed,
};

/// Periodic driver for [`Dashboard::refresh`]
#[derive(Debug)]
pub struct RefreshTimer<T: TimeSource> {
    interval_ms: u64,
    time: T,
    next_due: Timestamp,
    running: bool,
    passes: u64,
}

impl<T: TimeSource> RefreshTimer<T> {
    /// Start a timer; the first pass is due one interval from now
    pub fn new(interval_ms: u64, time: T) -> Self {
        let interval_ms = interval_ms.max(1);
        let next_due = time.now().saturating_add(interval_ms);
        info!("refresh timer started, interval {} ms", interval_ms);
        Self {
            interval_ms,
            time,
            next_due,
            running: true,
            passes: 0,
        }
    }

    /// Timer with the default five-second interval
    pub fn with_default_interval(time: T) -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS, time)
    }

    /// Run a pass if one is due; returns whether it ran
    pub fn poll<F: LevelFeed>(&mut self, dashboard: &mut Dashboard, feed: &mut F) -> bool {
        if !self.running {
            return false;
        }
        let now = self.time.now();
        if now < self.next_due {
            return false;
        }

        dashboard.refresh(feed, now);
        self.passes += 1;
        self.next_due = now.saturating_add(self.interval_ms);
        true
    }

    /// Cancel the timer; later polls do nothing until [`restart`](Self::restart)
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!("refresh timer stopped after {} passes", self.passes);
        }
    }

    /// Re-arm a stopped timer, next pass one interval from now
    pub fn restart(&mut self) {
        self.running = true;
        self.next_due = self.time.now().saturating_add(self.interval_ms);
        info!("refresh timer restarted, interval {} ms", self.interval_ms);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Passes run by this timer
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// When the next pass is due, `None` while stopped
    pub fn next_due(&self) -> Option<Timestamp> {
        self.running.then_some(self.next_due)
    }

    pub fn time_source(&self) -> &T {
        &self.time
    }

    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geo::GeoPoint,
        locale::LocalizedText,
        model::MeasurementPoint,
        simulate::{SampleSimulator, SimulatorConfig},
        time::FixedTime,
        zones::ZoneCategory,
    };

    fn setup() -> (Dashboard, SampleSimulator) {
        let mut dash = Dashboard::default();
        let limits = dash.zones().limits(ZoneCategory::Commercial);
        dash.add_point(
            MeasurementPoint::new(
                "mp-1",
                LocalizedText::new("Gewerbe", "Commercial"),
                ZoneCategory::Commercial,
                limits,
                GeoPoint::parse("51.373000", "7.701000").unwrap(),
                52.0,
            )
            .unwrap(),
        );
        (dash, SampleSimulator::seeded(SimulatorConfig::default(), 11))
    }

    #[test]
    fn runs_only_when_due() {
        let (mut dash, mut sim) = setup();
        let mut timer = RefreshTimer::new(5_000, FixedTime::new(0));

        assert!(!timer.poll(&mut dash, &mut sim));
        timer.time_source_mut().advance(4_999);
        assert!(!timer.poll(&mut dash, &mut sim));
        timer.time_source_mut().advance(1);
        assert!(timer.poll(&mut dash, &mut sim));
        assert!(!timer.poll(&mut dash, &mut sim));
        assert_eq!(dash.passes(), 1);
    }

    #[test]
    fn long_stall_runs_one_pass() {
        let (mut dash, mut sim) = setup();
        let mut timer = RefreshTimer::new(5_000, FixedTime::new(0));

        timer.time_source_mut().advance(60_000);
        assert!(timer.poll(&mut dash, &mut sim));
        assert!(!timer.poll(&mut dash, &mut sim));
        assert_eq!(timer.passes(), 1);
        assert_eq!(timer.next_due(), Some(65_000));
    }

    #[test]
    fn stop_and_restart() {
        let (mut dash, mut sim) = setup();
        let mut timer = RefreshTimer::with_default_interval(FixedTime::new(0));

        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.next_due(), None);
        timer.time_source_mut().advance(60_000);
        assert!(!timer.poll(&mut dash, &mut sim));

        timer.restart();
        assert!(!timer.poll(&mut dash, &mut sim));
        timer.time_source_mut().advance(5_000);
        assert!(timer.poll(&mut dash, &mut sim));
    }

    #[test]
    fn zero_interval_is_bumped() {
        let timer = RefreshTimer::new(0, FixedTime::new(0));
        assert_eq!(timer.interval_ms(), 1);
    }
}
