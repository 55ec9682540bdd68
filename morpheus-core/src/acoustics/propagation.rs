//! Outdoor Sound Propagation (ISO 9613-2, simplified)
//!
//! ## Model
//!
//! The level at a receiver is the source power minus the sum of the
//! attenuation terms:
//!
//! ```text
//! L = L_W + D_c - (A_div + A_atm + A_gr + A_bar + A_misc)
//! ```
//!
//! | term    | meaning                 | formula                                       |
//! |---------|-------------------------|-----------------------------------------------|
//! | `A_div` | geometric divergence    | `20·log10(d) + 11`, d floored at 1 m          |
//! | `A_atm` | atmospheric absorption  | `α·d/1000`, α = 2 dB/km A-weighted            |
//! | `A_gr`  | ground effect           | `clamp(4.8 - (2h_m/d_p)(17 + 300/d_p), 0, 10)·G` |
//! | `A_bar` | barrier (Maekawa)       | `10·log10(3 + 20N)`, N = 2δ/λ, capped at 25   |
//!
//! `d` is the slant distance, `d_p` its projection on the ground, `h_m` the
//! mean of source and receiver heights, and `G` the ground factor (0 hard,
//! 0.5 mixed, 1 soft).
//!
//! With octave bands enabled and a source spectrum present, `α` is the
//! energy-weighted mean of the ISO 9613-1 band coefficients instead of the
//! broadband value.
//!
//! Coordinates are local metres (x east, y north, z up), not WGS84.
//!
//! ## Example
//!
//! ```rust
//! use morpheus_core::acoustics::{NoiseSource, PropagationCalculator, Receiver};
//!
//! let calc = PropagationCalculator::new();
//! let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
//! let window = Receiver::new(100.0, 0.0, 4.0);
//!
//! let result = calc.calculate(&drone, &window, &[]);
//! assert!(result.level_dba < drone.lw_dba);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    acoustics::db_to_energy,
    constants::acoustics::{
        A_WEIGHTED_ABSORPTION_DB_PER_KM, BARRIER_WAVELENGTH_M, DEFAULT_BAND_ABSORPTION_DB_PER_KM,
        DEFAULT_RECEIVER_HEIGHT_M, DIVERGENCE_OFFSET_DB, HIGH_SOURCE_NOTE_M, MAX_BARRIER_DB,
        MAX_GRID_POINTS, MAX_GROUND_EFFECT_DB, MIN_DIVERGENCE_DISTANCE_M,
        OCTAVE_BAND_ABSORPTION_DB_PER_KM, SIMPLIFIED_MIN_DISTANCE_M, TYPICAL_DRONE_LW_DBA,
        TYPICAL_DRONE_SPECTRUM,
    },
    errors::{ValidationError, ValidationResult},
};

/// Ground surface between source and receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundType {
    /// Asphalt, concrete, water (G = 0)
    Hard,
    /// Grass, forest, farmland (G = 1)
    Soft,
    /// Mixed surfaces (G = 0.5)
    #[default]
    Mixed,
}

impl GroundType {
    /// Ground factor G
    pub const fn factor(&self) -> f64 {
        match self {
            GroundType::Hard => 0.0,
            GroundType::Soft => 1.0,
            GroundType::Mixed => 0.5,
        }
    }
}

/// A point source, usually a drone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSource {
    /// Sound power level, dB(A)
    pub lw_dba: f64,
    pub x: f64,
    pub y: f64,
    /// Height above ground (m)
    pub z: f64,
    /// Directivity correction D_c (dB)
    pub directivity_db: f64,
    pub name: String,
    /// Octave-band spectrum (Hz, dB)
    pub spectrum: Option<Vec<(u32, f64)>>,
}

impl NoiseSource {
    pub fn new(lw_dba: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            lw_dba,
            x,
            y,
            z,
            directivity_db: 0.0,
            name: String::from("Drohne"),
            spectrum: None,
        }
    }

    /// Small delivery drone, 75 dB(A) with its octave-band spectrum
    pub fn typical_drone(x: f64, y: f64, z: f64) -> Self {
        Self {
            name: String::from("Auriol X5"),
            spectrum: Some(TYPICAL_DRONE_SPECTRUM.to_vec()),
            ..Self::new(TYPICAL_DRONE_LW_DBA, x, y, z)
        }
    }
}

/// Receiver (immission point)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub x: f64,
    pub y: f64,
    /// Height above ground (m)
    pub z: f64,
    pub name: String,
    pub ground: GroundType,
}

impl Receiver {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            name: String::from("Immissionsort"),
            ground: GroundType::default(),
        }
    }

    pub fn with_ground(mut self, ground: GroundType) -> Self {
        self.ground = ground;
        self
    }
}

/// Screening obstacle (building, wall)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub name: String,
}

/// Attenuation terms and resulting level at the receiver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttenuationBreakdown {
    pub source_lw_dba: f64,
    pub distance_m: f64,
    pub a_div: f64,
    pub a_atm: f64,
    pub a_gr: f64,
    pub a_bar: f64,
    pub a_misc: f64,
    pub total_db: f64,
    /// Sound pressure level at the receiver, dB(A)
    pub level_dba: f64,
    pub notes: Vec<&'static str>,
}

/// Axis-aligned area for grid sweeps (local metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> ValidationResult<Self> {
        if !(max_x > min_x) {
            return Err(ValidationError::InvalidGeometry { reason: "max_x must exceed min_x" });
        }
        if !(max_y > min_y) {
            return Err(ValidationError::InvalidGeometry { reason: "max_y must exceed min_y" });
        }
        Ok(Self { min_x, min_y, max_x, max_y })
    }
}

/// One cell of a noise grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub level_dba: f64,
    pub distance_m: f64,
}

/// Propagation calculator
#[derive(Debug, Clone, Default)]
pub struct PropagationCalculator {
    octave_bands: bool,
}

impl PropagationCalculator {
    /// Broadband calculator
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the source spectrum for atmospheric absorption when present
    pub fn with_octave_bands(mut self, enabled: bool) -> Self {
        self.octave_bands = enabled;
        self
    }

    /// Level at `receiver` from `source`, screened by the worst of `obstacles`
    pub fn calculate(
        &self,
        source: &NoiseSource,
        receiver: &Receiver,
        obstacles: &[Obstacle],
    ) -> AttenuationBreakdown {
        let d = slant_distance(source, receiver);

        let a_div = geometric_divergence(d);
        let a_atm = self.atmospheric_absorption(d, source);
        let a_gr = ground_effect(source, receiver, d);
        let a_bar = obstacles
            .iter()
            .map(|o| barrier_attenuation(source, receiver, o, d))
            .fold(0.0, f64::max);
        let a_misc = 0.0;

        let total_db = a_div + a_atm + a_gr + a_bar + a_misc;
        let level_dba = source.lw_dba + source.directivity_db - total_db;

        let mut notes = Vec::new();
        if d < MIN_DIVERGENCE_DISTANCE_M {
            notes.push("very short distance, near-field effects possible");
        }
        if source.z > HIGH_SOURCE_NOTE_M {
            notes.push("high source, ground effect is approximate");
        }

        debug!("{} -> {}: {:.1} dB(A) at {:.1} m", source.name, receiver.name, level_dba, d);

        AttenuationBreakdown {
            source_lw_dba: source.lw_dba,
            distance_m: d,
            a_div,
            a_atm,
            a_gr,
            a_bar,
            a_misc,
            total_db,
            level_dba,
            notes,
        }
    }

    /// Sweep `bbox` on a `step_m` grid at `receiver_height_m`
    pub fn calculate_grid(
        &self,
        source: &NoiseSource,
        bbox: &BoundingBox,
        step_m: f64,
        receiver_height_m: f64,
    ) -> ValidationResult<Vec<GridPoint>> {
        if !(step_m > 0.0) || !step_m.is_finite() {
            return Err(ValidationError::InvalidGeometry { reason: "grid step must be positive" });
        }

        let too_large = ValidationError::InvalidGeometry { reason: "grid has too many points" };
        let axis = |span: f64| {
            let cells = (span / step_m).floor() + 1.0;
            if cells.is_finite() && cells <= MAX_GRID_POINTS as f64 {
                Some(cells as usize)
            } else {
                None
            }
        };
        let (nx, ny) = match (axis(bbox.max_x - bbox.min_x), axis(bbox.max_y - bbox.min_y)) {
            (Some(nx), Some(ny)) => (nx, ny),
            _ => return Err(too_large),
        };
        let count = match nx.checked_mul(ny) {
            Some(count) if count <= MAX_GRID_POINTS => count,
            _ => return Err(too_large),
        };

        let mut grid = Vec::with_capacity(count);
        for i in 0..nx {
            let x = bbox.min_x + i as f64 * step_m;
            for j in 0..ny {
                let y = bbox.min_y + j as f64 * step_m;
                let receiver = Receiver::new(x, y, receiver_height_m);
                let result = self.calculate(source, &receiver, &[]);
                grid.push(GridPoint {
                    x,
                    y,
                    z: receiver_height_m,
                    level_dba: result.level_dba,
                    distance_m: result.distance_m,
                });
            }
        }

        debug!("grid sweep: {} points", grid.len());
        Ok(grid)
    }

    fn atmospheric_absorption(&self, distance_m: f64, source: &NoiseSource) -> f64 {
        let alpha = match (&source.spectrum, self.octave_bands) {
            (Some(spectrum), true) if !spectrum.is_empty() => band_weighted_absorption(spectrum),
            _ => A_WEIGHTED_ABSORPTION_DB_PER_KM,
        };
        alpha * distance_m / 1000.0
    }
}

/// Level at ground below a drone from its altitude alone
///
/// Used by the dashboard's quick estimate: `L_W - 20·log10(d) - 11` with
/// the slant distance floored at 10 m.
pub fn simplified_level_dba(altitude_m: f64) -> f64 {
    let d = altitude_m.max(SIMPLIFIED_MIN_DISTANCE_M);
    TYPICAL_DRONE_LW_DBA - 20.0 * d.log10() - DIVERGENCE_OFFSET_DB
}

/// Default receiver for a point on the ground plan
pub fn window_receiver(x: f64, y: f64) -> Receiver {
    Receiver::new(x, y, DEFAULT_RECEIVER_HEIGHT_M)
}

fn slant_distance(source: &NoiseSource, receiver: &Receiver) -> f64 {
    let (dx, dy, dz) = (receiver.x - source.x, receiver.y - source.y, receiver.z - source.z);
    (dx * dx + dy * dy + dz * dz).sqrt()
}

fn geometric_divergence(distance_m: f64) -> f64 {
    20.0 * distance_m.max(MIN_DIVERGENCE_DISTANCE_M).log10() + DIVERGENCE_OFFSET_DB
}

fn band_absorption(freq_hz: u32) -> f64 {
    OCTAVE_BAND_ABSORPTION_DB_PER_KM
        .iter()
        .find(|(f, _)| *f == freq_hz)
        .map_or(DEFAULT_BAND_ABSORPTION_DB_PER_KM, |(_, alpha)| *alpha)
}

fn band_weighted_absorption(spectrum: &[(u32, f64)]) -> f64 {
    let (weighted, total) = spectrum.iter().fold((0.0, 0.0), |(w, t), (freq, level)| {
        let energy = db_to_energy(*level);
        (w + band_absorption(*freq) * energy, t + energy)
    });
    weighted / total
}

fn ground_effect(source: &NoiseSource, receiver: &Receiver, distance_m: f64) -> f64 {
    let dh = source.z - receiver.z;
    let dp = (distance_m * distance_m - dh * dh).max(0.0).sqrt();
    if dp < 1.0 {
        return 0.0;
    }

    let hm = (source.z + receiver.z) / 2.0;
    let a_gr = 4.8 - (2.0 * hm / dp) * (17.0 + 300.0 / dp);
    a_gr.clamp(0.0, MAX_GROUND_EFFECT_DB) * receiver.ground.factor()
}

fn barrier_attenuation(
    source: &NoiseSource,
    receiver: &Receiver,
    obstacle: &Obstacle,
    direct_m: f64,
) -> f64 {
    // Path over the obstacle's top edge
    let to_top = ((obstacle.x - source.x).powi(2)
        + (obstacle.y - source.y).powi(2)
        + (obstacle.height - source.z).powi(2))
    .sqrt();
    let from_top = ((receiver.x - obstacle.x).powi(2)
        + (receiver.y - obstacle.y).powi(2)
        + (receiver.z - obstacle.height).powi(2))
    .sqrt();

    let delta = to_top + from_top - direct_m;
    if delta <= 0.0 {
        return 0.0;
    }

    let fresnel = 2.0 * delta / BARRIER_WAVELENGTH_M;
    (10.0 * (3.0 + 20.0 * fresnel).log10()).min(MAX_BARRIER_DB)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> PropagationCalculator {
        PropagationCalculator::new()
    }

    #[test]
    fn divergence_at_reference_distances() {
        assert!((geometric_divergence(1.0) - 11.0).abs() < 1e-9);
        assert!((geometric_divergence(10.0) - 31.0).abs() < 1e-9);
        assert!((geometric_divergence(100.0) - 51.0).abs() < 1e-9);
        // floored at 1 m
        assert!((geometric_divergence(0.2) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn level_decreases_with_distance() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let mut last = f64::INFINITY;
        for x in [50.0, 100.0, 200.0, 500.0, 1000.0] {
            let r = calc().calculate(&drone, &Receiver::new(x, 0.0, 4.0), &[]);
            assert!(r.level_dba < last);
            last = r.level_dba;
        }
    }

    #[test]
    fn terms_add_up() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let r = calc().calculate(&drone, &Receiver::new(100.0, 0.0, 4.0), &[]);
        let sum = r.a_div + r.a_atm + r.a_gr + r.a_bar + r.a_misc;
        assert!((r.total_db - sum).abs() < 1e-9);
        assert!((r.level_dba - (75.0 - sum)).abs() < 1e-9);
        assert!(r.notes.is_empty());
    }

    #[test]
    fn hard_ground_has_no_ground_effect() {
        let drone = NoiseSource::new(75.0, 0.0, 0.0, 2.0);
        let rx = Receiver::new(500.0, 0.0, 1.5).with_ground(GroundType::Hard);
        assert_eq!(calc().calculate(&drone, &rx, &[]).a_gr, 0.0);

        let soft = Receiver::new(500.0, 0.0, 1.5).with_ground(GroundType::Soft);
        let r = calc().calculate(&drone, &soft, &[]);
        assert!(r.a_gr > 0.0 && r.a_gr <= MAX_GROUND_EFFECT_DB);
    }

    #[test]
    fn directly_overhead_skips_ground_effect() {
        let drone = NoiseSource::new(75.0, 0.0, 0.0, 50.0);
        let r = calc().calculate(&drone, &Receiver::new(0.0, 0.0, 4.0), &[]);
        assert_eq!(r.a_gr, 0.0);
        assert!((r.distance_m - 46.0).abs() < 1e-9);
    }

    #[test]
    fn barrier_takes_worst_obstacle_and_caps() {
        let source = NoiseSource::new(75.0, 0.0, 0.0, 2.0);
        let rx = Receiver::new(100.0, 0.0, 2.0);
        let low = Obstacle { x: 50.0, y: 0.0, height: 3.0, width: 10.0, length: 5.0, name: "Mauer".into() };
        let tall = Obstacle { height: 60.0, name: "Hochhaus".into(), ..low.clone() };

        let r_low = calc().calculate(&source, &rx, std::slice::from_ref(&low));
        let r_both = calc().calculate(&source, &rx, &[low, tall]);
        assert!(r_low.a_bar > 0.0);
        assert!(r_both.a_bar > r_low.a_bar);
        assert!(r_both.a_bar <= MAX_BARRIER_DB);
    }

    #[test]
    fn octave_bands_raise_absorption_for_drone_spectrum() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let rx = Receiver::new(1000.0, 0.0, 4.0);
        let broadband = calc().calculate(&drone, &rx, &[]);
        let banded = calc().with_octave_bands(true).calculate(&drone, &rx, &[]);
        // drone energy sits around 1-2 kHz where α is well above 2 dB/km
        assert!(banded.a_atm > broadband.a_atm);
        assert!((broadband.a_atm - 2.0 * broadband.distance_m / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn notes_for_edge_geometry() {
        let high = NoiseSource::new(75.0, 0.0, 0.0, 150.0);
        let r = calc().calculate(&high, &Receiver::new(10.0, 0.0, 4.0), &[]);
        assert_eq!(r.notes, vec!["high source, ground effect is approximate"]);

        let close = NoiseSource::new(75.0, 0.0, 0.0, 4.0);
        let r = calc().calculate(&close, &Receiver::new(0.5, 0.0, 4.0), &[]);
        assert_eq!(r.notes.len(), 1);
    }

    #[test]
    fn grid_covers_box_inclusively() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let bbox = BoundingBox::new(-100.0, -100.0, 100.0, 100.0).unwrap();
        let grid = calc().calculate_grid(&drone, &bbox, 50.0, 4.0).unwrap();
        assert_eq!(grid.len(), 25);
        assert_eq!(grid[0].x, -100.0);
        assert_eq!(grid[24].x, 100.0);
        assert_eq!(grid[24].y, 100.0);

        let loudest = grid.iter().map(|g| g.level_dba).fold(f64::MIN, f64::max);
        let centre = grid.iter().find(|g| g.x == 0.0 && g.y == 0.0).unwrap();
        assert_eq!(centre.level_dba, loudest);
    }

    #[test]
    fn grid_rejects_bad_input() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(calc().calculate_grid(&drone, &bbox, 0.0, 4.0).is_err());
        assert!(calc().calculate_grid(&drone, &bbox, f64::NAN, 4.0).is_err());
        assert!(BoundingBox::new(10.0, 0.0, 10.0, 5.0).is_err());
        assert!(BoundingBox::new(0.0, 5.0, 10.0, 1.0).is_err());
    }

    #[test]
    fn grid_refuses_oversized_sweeps() {
        let drone = NoiseSource::typical_drone(0.0, 0.0, 50.0);
        let huge = BoundingBox::new(-1e300, -1e300, 1e300, 1e300).unwrap();
        assert!(matches!(
            calc().calculate_grid(&drone, &huge, 1e-3, 4.0),
            Err(ValidationError::InvalidGeometry { .. })
        ));

        // 2001 x 2001 passes each axis but not the total
        let wide = BoundingBox::new(0.0, 0.0, 2000.0, 2000.0).unwrap();
        assert!(calc().calculate_grid(&drone, &wide, 1.0, 4.0).is_err());
    }

    #[test]
    fn simplified_estimate() {
        // 75 - 20·log10(50) - 11 = 30.02
        assert!((simplified_level_dba(50.0) - 30.0206).abs() < 1e-3);
        // floored at 10 m
        assert_eq!(simplified_level_dba(2.0), simplified_level_dba(10.0));
    }

    #[test]
    fn window_receiver_height() {
        assert_eq!(window_receiver(1.0, 2.0).z, DEFAULT_RECEIVER_HEIGHT_M);
    }
}
