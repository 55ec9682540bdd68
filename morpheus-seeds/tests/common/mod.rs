//! Shared helpers for seed loading tests

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Point record with the given coordinates as JSON strings
pub fn point_json(id: &str, zone: &str, lat: &str, lng: &str, level_db: f64) -> String {
    format!(
        r#"{{"id": "{id}", "name": {{"de": "{id}", "en": "{id}"}}, "zone": "{zone}",
            "lat": "{lat}", "lng": "{lng}", "initial_db": {level_db}}}"#
    )
}

/// Route record from (lat, lng) text pairs
pub fn route_json(id: &str, waypoints: &[(&str, &str)]) -> String {
    let waypoints: Vec<String> = waypoints
        .iter()
        .map(|(lat, lng)| format!(r#"{{"lat": "{lat}", "lng": "{lng}"}}"#))
        .collect();
    format!(
        r##"{{"id": "{id}", "name": {{"de": "{id}", "en": "{id}"}}, "color": "#FF8800",
            "waypoints": [{}]}}"##,
        waypoints.join(", ")
    )
}

pub fn dataset_json(config: &str, points: &[String], routes: &[String]) -> String {
    format!(
        r#"{{"config": {config}, "points": [{}], "routes": [{}]}}"#,
        points.join(", "),
        routes.join(", ")
    )
}

/// Write `contents` to a temporary `.json` file
pub fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp seed file");
    file.write_all(contents.as_bytes()).expect("write temp seed file");
    file
}
