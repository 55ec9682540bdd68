//! Sample simulator
//!
//! Produces synthetic levels for the dashboard when no sensor data is
//! wired in. Each step is a bounded random walk:
//!
//! ```text
//! next = clamp(current + U(-step, +step), floor, ceiling)
//! ```
//!
//! Everything here is a simulation. Snapshots built from a simulated feed
//! carry the "simulated data" flag so a viewer never mistakes these values
//! for measurements.
//!
//! ```
//! use morpheus_core::simulate::{SampleSimulator, SimulatorConfig};
//!
//! let mut sim = SampleSimulator::seeded(SimulatorConfig::default(), 7);
//! let levels: Vec<f64> = sim.samples(50.0).take(4).collect();
//! assert!(levels.iter().all(|l| (35.0..=75.0).contains(l)));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    classify::ComplianceStatus,
    constants::{SIM_CEILING_DB, SIM_FLOOR_DB, SIM_STEP_DB},
    errors::ValidationResult,
    model::MeasurementPoint,
    time::Timestamp,
    traits::LevelFeed,
};

/// Walk parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest change per step, dB
    pub step_db: f64,
    pub floor_db: f64,
    pub ceiling_db: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            step_db: SIM_STEP_DB,
            floor_db: SIM_FLOOR_DB,
            ceiling_db: SIM_CEILING_DB,
        }
    }
}

impl SimulatorConfig {
    /// Config with sanitized bounds
    ///
    /// Swapped bounds are put back in order, a negative step is taken by
    /// magnitude, and non-finite values fall back to the defaults. The step
    /// never exceeds the width of the band.
    pub fn new_with_limits(step_db: f64, floor_db: f64, ceiling_db: f64) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };

        let step_db = finite_or(step_db, defaults.step_db).abs();
        let floor_db = finite_or(floor_db, defaults.floor_db);
        let ceiling_db = finite_or(ceiling_db, defaults.ceiling_db);
        let (floor_db, ceiling_db) = if floor_db > ceiling_db {
            (ceiling_db, floor_db)
        } else {
            (floor_db, ceiling_db)
        };
        let step_db = step_db.min(ceiling_db - floor_db);

        Self {
            step_db,
            floor_db,
            ceiling_db,
        }
    }

    /// Quiet surroundings: small steps, low band
    pub fn rural() -> Self {
        Self {
            step_db: 1.0,
            floor_db: 30.0,
            ceiling_db: 60.0,
        }
    }

    /// Busy streets: larger swings, higher band
    pub fn urban() -> Self {
        Self {
            step_db: 3.0,
            floor_db: 45.0,
            ceiling_db: 85.0,
        }
    }

    fn clamp(&self, level_db: f64) -> f64 {
        level_db.clamp(self.floor_db, self.ceiling_db)
    }
}

/// Bounded random walk over levels
#[derive(Debug, Clone)]
pub struct SampleSimulator<R = StdRng> {
    config: SimulatorConfig,
    rng: R,
}

impl SampleSimulator<StdRng> {
    /// Deterministic simulator; the same seed yields the same walk
    pub fn seeded(config: SimulatorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Simulator seeded from OS entropy
    pub fn from_entropy(config: SimulatorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Restart the walk from a fresh seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<R: Rng> SampleSimulator<R> {
    /// Simulator over any RNG; `config` is sanitized first
    pub fn with_rng(config: SimulatorConfig, rng: R) -> Self {
        let config =
            SimulatorConfig::new_with_limits(config.step_db, config.floor_db, config.ceiling_db);
        Self { config, rng }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// One walk step from `current_db`
    pub fn perturb(&mut self, current_db: f64) -> f64 {
        let step = self.config.step_db;
        let delta = if step > 0.0 {
            // Scaled unit draw; `-step..=step` overflows for huge steps
            self.rng.gen_range(-1.0..=1.0) * step
        } else {
            0.0
        };
        self.config.clamp(current_db + delta)
    }

    /// Advance `point` by one step and reclassify it
    pub fn step(&mut self, point: &mut MeasurementPoint, now: Timestamp) -> ValidationResult<ComplianceStatus> {
        let next = self.perturb(point.current_db());
        point.set_level(next, now)
    }

    /// Endless walk starting at `start_db`
    ///
    /// The first item is already one step away from `start_db`.
    pub fn samples(&mut self, start_db: f64) -> Samples<'_, R> {
        Samples {
            simulator: self,
            level_db: start_db,
        }
    }
}

impl<R: Rng> LevelFeed for SampleSimulator<R> {
    fn next_level(&mut self, point: &MeasurementPoint) -> f64 {
        self.perturb(point.current_db())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Iterator returned by [`SampleSimulator::samples`]
pub struct Samples<'a, R> {
    simulator: &'a mut SampleSimulator<R>,
    level_db: f64,
}

impl<R: Rng> Iterator for Samples<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.level_db = self.simulator.perturb(self.level_db);
        Some(self.level_db)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
