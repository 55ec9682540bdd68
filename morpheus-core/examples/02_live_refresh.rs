//! Live Refresh Example
//!
//! Drives a small dashboard with the sample simulator and the refresh
//! timer, printing the render snapshot after each pass.
//!
//! ## What You'll Learn
//!
//! - Owning dashboard state and handing it to the timer
//! - Reproducible simulation with a fixed seed
//! - Reading a localized snapshot
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_live_refresh
//! ```

use morpheus_core::{
    Dashboard, FixedTime, GeoPoint, Locale, LocalizedText, MeasurementPoint, RefreshTimer,
    SampleSimulator, SimulatorConfig, ValidationResult, ZoneCategory,
};

fn build_dashboard() -> ValidationResult<Dashboard> {
    let mut dashboard = Dashboard::default();
    let seeds = [
        ("mp-lab", "Labor", "Laboratory", ZoneCategory::Commercial, "51.373000", "7.701000", 52.3),
        ("mp-hospital", "Klinikum", "Hospital", ZoneCategory::Hospital, "51.377000", "7.705000", 41.2),
        ("mp-park", "Stadtgarten", "City park", ZoneCategory::Recreation, "51.375200", "7.702800", 47.5),
        ("mp-bad", "Fehlerhaft", "Broken", ZoneCategory::Residential, "51.3752", "7.702800", 47.5),
    ];

    for (id, de, en, zone, lat, lng, level) in seeds {
        let position = match GeoPoint::parse(lat, lng) {
            Ok(p) => p,
            Err(e) => {
                println!("skipping {}: {}", id, e);
                continue;
            }
        };
        let limits = dashboard.zones().limits(zone);
        let point = MeasurementPoint::new(id, LocalizedText::new(de, en), zone, limits, position, level)?;
        dashboard.add_point(point);
    }
    Ok(dashboard)
}

fn main() -> ValidationResult<()> {
    println!("MORPHEUS Live Refresh Example");
    println!("=============================\n");

    let mut dashboard = build_dashboard()?;
    let mut simulator = SampleSimulator::seeded(SimulatorConfig::default(), 42);
    let mut timer = RefreshTimer::with_default_interval(FixedTime::new(0));

    // Host loop: poll once a second of simulated time
    for _ in 0..20 {
        timer.time_source_mut().advance(1_000);
        if !timer.poll(&mut dashboard, &mut simulator) {
            continue;
        }

        let snapshot = dashboard.snapshot(Locale::En);
        println!("pass {} ({})", snapshot.passes, snapshot.labels.simulated_data);
        for p in &snapshot.points {
            println!(
                "  {:<12} {:5.1} dB  peak {:5.1}  {:>5.1}%  {}",
                p.name, p.current_db, p.peak_db, p.utilization_pct, p.status_label
            );
        }
        println!(
            "  compliance rate {:.0}%, max {:.1} dB\n",
            snapshot.stats.compliance_rate * 100.0,
            snapshot.stats.max_level_db.unwrap_or_default()
        );
    }

    timer.stop();
    println!("timer stopped after {} passes", timer.passes());
    Ok(())
}
