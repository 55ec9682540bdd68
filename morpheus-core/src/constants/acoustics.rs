//! Acoustic Constants
//!
//! Classifier thresholds, simulator bounds, and the parameters of the
//! simplified ISO 9613-2 outdoor propagation model.

// ===== CLASSIFIER =====

/// Utilization at which a point turns "warning" (inclusive).
pub const WARNING_UTILIZATION: f64 = 0.9;

/// Utilization at which a point turns "critical" (inclusive).
pub const CRITICAL_UTILIZATION: f64 = 1.0;

// ===== SIMULATOR =====

/// Half-width of the uniform perturbation per simulated step (dB).
pub const SIM_STEP_DB: f64 = 2.0;

/// Lowest level the simulator will produce (dB).
pub const SIM_FLOOR_DB: f64 = 35.0;

/// Highest level the simulator will produce (dB).
pub const SIM_CEILING_DB: f64 = 75.0;

// ===== SOURCES =====

/// Sound power level of a typical small delivery drone, dB(A).
pub const TYPICAL_DRONE_LW_DBA: f64 = 75.0;

/// Octave-band spectrum of the typical drone (Hz, dB).
pub const TYPICAL_DRONE_SPECTRUM: [(u32, f64); 8] = [
    (63, 55.0),
    (125, 60.0),
    (250, 68.0),
    (500, 72.0),
    (1000, 75.0),
    (2000, 73.0),
    (4000, 70.0),
    (8000, 65.0),
];

/// Default receiver height above ground (m), first-floor window.
pub const DEFAULT_RECEIVER_HEIGHT_M: f64 = 4.0;

/// Minimum slant distance for the dashboard's altitude-only estimate (m).
pub const SIMPLIFIED_MIN_DISTANCE_M: f64 = 10.0;

// ===== PROPAGATION (ISO 9613-2) =====

/// Constant term of geometric divergence for a point source (dB).
pub const DIVERGENCE_OFFSET_DB: f64 = 11.0;

/// Distance below which divergence is evaluated at 1 m.
pub const MIN_DIVERGENCE_DISTANCE_M: f64 = 1.0;

/// A-weighted broadband atmospheric absorption (dB/km).
pub const A_WEIGHTED_ABSORPTION_DB_PER_KM: f64 = 2.0;

/// Absorption coefficient used for bands missing from the table (dB/km, 1 kHz).
pub const DEFAULT_BAND_ABSORPTION_DB_PER_KM: f64 = 3.7;

/// Atmospheric absorption per octave band at 20 °C, 70 % RH (Hz, dB/km).
///
/// Source: ISO 9613-1, Table 2
pub const OCTAVE_BAND_ABSORPTION_DB_PER_KM: [(u32, f64); 8] = [
    (63, 0.1),
    (125, 0.4),
    (250, 1.0),
    (500, 1.9),
    (1000, 3.7),
    (2000, 9.7),
    (4000, 32.8),
    (8000, 117.0),
];

/// Upper clamp of the ground effect before scaling by G (dB).
pub const MAX_GROUND_EFFECT_DB: f64 = 10.0;

/// Wavelength used for the Fresnel number, about 1 kHz at 340 m/s (m).
pub const BARRIER_WAVELENGTH_M: f64 = 0.34;

/// Barrier attenuation cap (dB).
pub const MAX_BARRIER_DB: f64 = 25.0;

/// Source height above which the ground model is flagged as approximate (m).
pub const HIGH_SOURCE_NOTE_M: f64 = 100.0;

/// Largest receiver grid a single sweep will compute.
pub const MAX_GRID_POINTS: usize = 1_000_000;
