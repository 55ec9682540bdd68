//! Propagation Example
//!
//! Estimates the level a drone produces at nearby receivers and checks it
//! against the day and night limits of their zones.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_propagation
//! ```

use morpheus_core::{
    acoustics::{
        propagation::window_receiver, simplified_level_dba, ComplianceCheck, GroundType,
        NoiseSource, PropagationCalculator, TimePeriod,
    },
    Locale, ValidationResult, ZoneCategory, ZoneLimitTable,
};

fn main() -> ValidationResult<()> {
    println!("MORPHEUS Propagation Example");
    println!("============================\n");

    println!("Quick estimate directly below the drone:");
    for altitude in [10.0, 30.0, 50.0, 100.0] {
        println!("  {:>5.0} m -> {:5.1} dB(A)", altitude, simplified_level_dba(altitude));
    }

    let zones = ZoneLimitTable::standard();
    let calc = PropagationCalculator::new().with_octave_bands(true);
    let drone = NoiseSource::typical_drone(0.0, 0.0, 40.0);

    let receivers = [
        (ZoneCategory::Hospital, window_receiver(80.0, 20.0)),
        (ZoneCategory::Residential, window_receiver(150.0, -40.0).with_ground(GroundType::Soft)),
        (ZoneCategory::Commercial, window_receiver(30.0, 0.0).with_ground(GroundType::Hard)),
    ];

    println!("\nISO 9613-2 (simplified) at 40 m altitude:");
    for (zone, receiver) in &receivers {
        let result = calc.calculate(&drone, receiver, &[]);
        let limits = zones.limits(*zone);
        println!(
            "  {:<14} d={:6.1} m  A_div={:4.1} A_atm={:3.2} A_gr={:3.1}  L={:5.1} dB(A)",
            zones.get(*zone).name(Locale::En),
            result.distance_m,
            result.a_div,
            result.a_atm,
            result.a_gr,
            result.level_dba
        );

        for period in [TimePeriod::Day, TimePeriod::Night] {
            let check = ComplianceCheck::evaluate(result.level_dba, *zone, &limits, period)?;
            println!(
                "      {:?}: limit {:.0} dB, margin {:+.1} dB {}",
                period,
                check.limit_dba,
                check.margin_db,
                if check.compliant { "ok" } else { "EXCEEDED" }
            );
        }
    }

    Ok(())
}
