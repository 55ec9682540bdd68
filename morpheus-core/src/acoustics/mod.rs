//! Acoustic calculations
//!
//! - [`propagation`]: simplified ISO 9613-2 outdoor propagation from a drone
//!   to a receiver, plus grid sweeps for noise maps
//! - [`compliance`]: day/night limit check with margin, after TA Lärm
//!
//! Level arithmetic is energetic. Use [`db_to_energy`] / [`energy_to_db`]
//! rather than adding dB values.

pub mod compliance;
pub mod propagation;

pub use compliance::{ComplianceCheck, TimePeriod};
pub use propagation::{
    simplified_level_dba, AttenuationBreakdown, BoundingBox, GridPoint, GroundType, NoiseSource,
    Obstacle, PropagationCalculator, Receiver,
};

/// Relative energy of a level, `10^(L/10)`
pub fn db_to_energy(level_db: f64) -> f64 {
    10f64.powf(level_db / 10.0)
}

/// Level of a relative energy, `10·log10(E)`
pub fn energy_to_db(energy: f64) -> f64 {
    10.0 * energy.log10()
}

/// Energetic sum of levels (two 60 dB sources give ~63 dB)
pub fn energetic_sum_db<I: IntoIterator<Item = f64>>(levels: I) -> Option<f64> {
    let mut any = false;
    let energy: f64 = levels
        .into_iter()
        .inspect(|_| any = true)
        .map(db_to_energy)
        .sum();
    any.then(|| energy_to_db(energy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_round_trip() {
        assert!((energy_to_db(db_to_energy(63.2)) - 63.2).abs() < 1e-9);
        assert!((db_to_energy(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn doubling_sources_adds_three_db() {
        let sum = energetic_sum_db([60.0, 60.0]).unwrap();
        assert!((sum - 63.0103).abs() < 1e-3);
        assert_eq!(energetic_sum_db(std::iter::empty()), None);
    }
}
