//! Coordinate Validation Example
//!
//! Shows the precision gate every coordinate passes before it reaches the
//! map, and how a route with a single bad waypoint is dropped as a whole.
//!
//! ## What You'll Learn
//!
//! - Validating text coordinates and reading the error
//! - The numeric entry point and its shortest-form rule
//! - All-or-nothing route rendering
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_coordinate_validation
//! ```

use morpheus_core::{
    validate_coordinate, GeoPoint, LocalizedText, Route, RouteMetrics, ValidationError,
};

fn main() {
    println!("MORPHEUS Coordinate Validation Example");
    println!("======================================\n");

    let cases = [
        ("51.371099", "7.693150", "valid, six digits each"),
        ("91.000000", "7.693150", "latitude out of range"),
        ("51.371", "7.693", "too few digits"),
        ("51.3710990", "7.6931500", "too many digits"),
        ("5.137110e1", "7.693150", "exponential notation"),
        ("north", "7.693150", "not a number"),
    ];

    for (lat, lng, description) in &cases {
        let verdict = if validate_coordinate(lat, lng) { "✓" } else { "✗" };
        println!("{} {:>11} {:>10}  {}", verdict, lat, lng, description);

        if let Err(e) = GeoPoint::parse(lat, lng) {
            println!("      {}", explain(&e));
        }
    }

    println!("\nNumeric input is judged by its shortest decimal form:");
    for (lat, lng) in [(51.371099, 7.69315), (51.371099, 7.693151)] {
        match GeoPoint::from_degrees(lat, lng) {
            Ok(p) => println!("  ({}, {}) -> ok at {:.6}, {:.6}", lat, lng, p.lat(), p.lng()),
            Err(e) => println!("  ({}, {}) -> {}", lat, lng, e),
        }
    }

    println!("\nRoutes are drawn whole or not at all:");
    let good = [
        ("51.373000", "7.701000"),
        ("51.375000", "7.703000"),
        ("51.377000", "7.705000"),
    ];
    let bad = [
        ("51.373000", "7.701000"),
        ("51.373500", "7.701500"),
        ("51.3755", "7.703500"),
        ("51.376500", "7.704500"),
        ("51.377000", "7.705000"),
    ];

    for (id, waypoints) in [("route-a", &good[..]), ("route-c", &bad[..])] {
        let route = Route::new(
            id,
            LocalizedText::new(id, id),
            "#0000FF",
            RouteMetrics::default(),
            waypoints.iter().copied(),
        );
        println!(
            "  {}: {} of {} waypoints drawn, {:.0} m",
            route.id(),
            route.rendered_waypoints().len(),
            waypoints.len(),
            route.path_length_m()
        );
        if let Some(rejection) = route.rejection() {
            println!("    waypoint {} rejected: {}", rejection.waypoint + 1, rejection.error);
        }
    }
}

fn explain(error: &ValidationError) -> String {
    match error {
        ValidationError::CoordinateOutOfRange { .. } => format!("range: {}", error),
        ValidationError::PrecisionViolation { .. } | ValidationError::ExponentNotation { .. } => {
            format!("precision: {}", error)
        }
        _ => format!("other: {}", error),
    }
}
