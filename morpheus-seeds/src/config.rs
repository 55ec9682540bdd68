//! Session configuration from the seed file's `config` section

use serde::{Deserialize, Serialize};

use morpheus_core::{
    constants::DEFAULT_REFRESH_INTERVAL_MS, Locale, RefreshTimer, SampleSimulator,
    SimulatorConfig, TimeSource, ValidationResult, ZoneCategory, ZoneLimitTable,
};

use crate::SeedError;

/// Replacement limits for one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneOverride {
    pub zone: ZoneCategory,
    pub day_db: f64,
    pub night_db: f64,
}

/// Refresh loop, simulator and display settings
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub refresh_interval_ms: u64,
    pub simulator: SimulatorConfig,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub locale: Locale,
    pub zone_overrides: Vec<ZoneOverride>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            simulator: SimulatorConfig::default(),
            seed: None,
            locale: Locale::default(),
            zone_overrides: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Reproducible session for demos and screenshots
    pub fn demo() -> Self {
        Self {
            seed: Some(42),
            ..Self::default()
        }
    }

    /// One-second refresh with the wider urban walk
    pub fn stress() -> Self {
        Self {
            refresh_interval_ms: 1000,
            simulator: SimulatorConfig::urban(),
            ..Self::default()
        }
    }

    /// Simulator settings with out-of-order or non-finite bounds repaired
    pub fn simulator_config(&self) -> SimulatorConfig {
        let s = self.simulator;
        SimulatorConfig::new_with_limits(s.step_db, s.floor_db, s.ceiling_db)
    }

    /// Standard zone table with the configured overrides applied
    pub fn zone_table(&self) -> Result<ZoneLimitTable, SeedError> {
        Ok(self.checked_zone_table()?)
    }

    pub(crate) fn checked_zone_table(&self) -> ValidationResult<ZoneLimitTable> {
        let overrides = self.zone_overrides.iter().map(|o| (o.zone, o.day_db, o.night_db));
        ZoneLimitTable::with_overrides(overrides)
    }

    pub fn build_simulator(&self) -> SampleSimulator {
        match self.seed {
            Some(seed) => SampleSimulator::seeded(self.simulator_config(), seed),
            None => SampleSimulator::from_entropy(self.simulator_config()),
        }
    }

    pub fn build_timer<T: TimeSource>(&self, time: T) -> RefreshTimer<T> {
        RefreshTimer::new(self.refresh_interval_ms, time)
    }
}
