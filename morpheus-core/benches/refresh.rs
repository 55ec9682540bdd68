//! Refresh pass benchmarks
//!
//! Measures a full refresh over growing point counts, snapshot building, and
//! the coordinate validator on its own.
//!
//! Run: `cargo bench --bench refresh`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morpheus_core::{
    validate_coordinate, Dashboard, GeoPoint, Locale, LocalizedText, MeasurementPoint,
    SampleSimulator, SimulatorConfig, ZoneCategory,
};

fn dashboard_with(points: usize) -> Dashboard {
    let mut dashboard = Dashboard::default();
    for i in 0..points {
        let zone = ZoneCategory::ALL[i % ZoneCategory::ALL.len()];
        let lat = format!("51.{:06}", 370_000 + i % 10_000);
        let point = MeasurementPoint::new(
            format!("mp-{i}"),
            LocalizedText::new("Messpunkt", "Measurement point"),
            zone,
            dashboard.zones().limits(zone),
            GeoPoint::parse(&lat, "7.701000").expect("bench coordinates are valid"),
            50.0,
        )
        .expect("bench level is valid");
        dashboard.add_point(point);
    }
    dashboard
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh_pass");

    for points in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &points| {
            let mut dashboard = dashboard_with(points);
            let mut sim = SampleSimulator::seeded(SimulatorConfig::default(), 7);
            let mut now = 0;
            b.iter(|| {
                now += 5_000;
                black_box(dashboard.refresh(&mut sim, now))
            })
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let dashboard = dashboard_with(100);

    c.bench_function("snapshot_100", |b| {
        b.iter(|| black_box(dashboard.snapshot(Locale::En).points.len()))
    });
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_coordinate");

    group.bench_function("valid", |b| {
        b.iter(|| black_box(validate_coordinate(black_box("51.371099"), black_box("7.693150"))))
    });

    group.bench_function("exponent", |b| {
        b.iter(|| black_box(validate_coordinate(black_box("5.137109e1"), black_box("7.693150"))))
    });

    group.finish();
}

criterion_group!(benches, bench_refresh, bench_snapshot, bench_validator);
criterion_main!(benches);
