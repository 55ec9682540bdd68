//! Drone overflight levels checked against zone limits

use morpheus_core::{
    acoustics::{
        propagation::window_receiver, simplified_level_dba, BoundingBox, ComplianceCheck,
        GroundType, NoiseSource, Obstacle, PropagationCalculator, TimePeriod,
    },
    ZoneCategory, ZoneLimitTable,
};

#[test]
fn test_low_pass_over_hospital_breaks_night_limit_only() {
    let limits = ZoneLimitTable::standard().limits(ZoneCategory::Hospital);

    // 75 - 20 - 11 = 44 dB(A) directly below at 10 m
    let level = simplified_level_dba(10.0);
    assert!((level - 44.0).abs() < 1e-9);

    let day = ComplianceCheck::evaluate(level, ZoneCategory::Hospital, &limits, TimePeriod::Day)
        .unwrap();
    let night =
        ComplianceCheck::evaluate(level, ZoneCategory::Hospital, &limits, TimePeriod::Night)
            .unwrap();
    assert!(day.compliant);
    assert!(!night.compliant);
    assert!((night.margin_db + 9.0).abs() < 1e-9);
}

#[test]
fn test_simplified_estimate_floors_altitude() {
    assert_eq!(simplified_level_dba(2.0), simplified_level_dba(10.0));
    assert!(simplified_level_dba(100.0) < simplified_level_dba(50.0));
}

#[test]
fn test_full_model_with_barrier_and_soft_ground() {
    let calc = PropagationCalculator::new();
    let drone = NoiseSource::typical_drone(0.0, 0.0, 30.0);
    let open = window_receiver(200.0, 0.0);
    let soft = window_receiver(200.0, 0.0).with_ground(GroundType::Soft);
    let wall = Obstacle {
        x: 190.0,
        y: 0.0,
        height: 12.0,
        width: 20.0,
        length: 1.0,
        name: "Lärmschutzwand".into(),
    };

    let base = calc.calculate(&drone, &open, &[]);
    let screened = calc.calculate(&drone, &open, &[wall]);
    let absorbed = calc.calculate(&drone, &soft, &[]);

    assert!(screened.a_bar > 0.0);
    assert!(screened.level_dba < base.level_dba);
    assert!(absorbed.a_gr >= base.a_gr);
    assert!(base.notes.is_empty());
}

#[test]
fn test_grid_peaks_under_the_drone() {
    let calc = PropagationCalculator::new().with_octave_bands(true);
    let drone = NoiseSource::typical_drone(50.0, 50.0, 40.0);
    let bbox = BoundingBox::new(0.0, 0.0, 100.0, 100.0).unwrap();

    let grid = calc.calculate_grid(&drone, &bbox, 50.0, 4.0).unwrap();
    assert_eq!(grid.len(), 9);

    let loudest = grid
        .iter()
        .max_by(|a, b| a.level_dba.total_cmp(&b.level_dba))
        .unwrap();
    assert_eq!((loudest.x, loudest.y), (50.0, 50.0));

    assert!(calc.calculate_grid(&drone, &bbox, 0.0, 4.0).is_err());
}
