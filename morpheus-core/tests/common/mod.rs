//! Shared fixtures for integration tests
//!
//! - Hagen test area points and routes
//! - Scripted level feeds for deterministic refresh passes

#![allow(dead_code)]

use morpheus_core::{
    Dashboard, GeoPoint, LevelFeed, LocalizedText, MeasurementPoint, Route, RouteMetrics,
    ZoneCategory, ZoneLimitTable,
};

/// Launch site at the laboratory
pub const LAB: (&str, &str) = ("51.373000", "7.701000");

/// Landing site at the hospital
pub const HOSPITAL: (&str, &str) = ("51.377000", "7.705000");

pub fn point(id: &str, zone: ZoneCategory, level_db: f64) -> MeasurementPoint {
    let limits = ZoneLimitTable::standard().limits(zone);
    MeasurementPoint::new(
        id,
        LocalizedText::new(format!("Messpunkt {id}"), format!("Measurement point {id}")),
        zone,
        limits,
        GeoPoint::parse(LAB.0, LAB.1).expect("fixture coordinates are valid"),
        level_db,
    )
    .expect("fixture level is valid")
}

pub fn route(id: &str, waypoints: &[(&str, &str)]) -> Route {
    Route::new(
        id,
        LocalizedText::new(id, id),
        "#0000FF",
        RouteMetrics::default(),
        waypoints.iter().copied(),
    )
}

/// Route C of the test area: five waypoints from lab to hospital
pub fn route_c_waypoints() -> Vec<(&'static str, &'static str)> {
    vec![
        LAB,
        ("51.373500", "7.701500"),
        ("51.375500", "7.703500"),
        ("51.376500", "7.704500"),
        HOSPITAL,
    ]
}

/// Dashboard with one point per status and two routes (one broken)
pub fn hagen_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::default();
    dashboard.add_point(point("mp-residential", ZoneCategory::Residential, 48.0));
    dashboard.add_point(point("mp-school", ZoneCategory::School, 50.0));
    dashboard.add_point(point("mp-hospital", ZoneCategory::Hospital, 47.0));
    dashboard.add_route(route("route-a", &[LAB, ("51.375000", "7.703000"), HOSPITAL]));

    let mut broken = route_c_waypoints();
    broken[2] = ("51.3755", "7.703500");
    dashboard.add_route(route("route-c", &broken));
    dashboard
}

/// Feed that plays back levels in order, then repeats the last one
pub struct ScriptedFeed {
    levels: Vec<f64>,
    cursor: usize,
}

impl ScriptedFeed {
    pub fn new(levels: impl Into<Vec<f64>>) -> Self {
        Self { levels: levels.into(), cursor: 0 }
    }

    pub fn constant(level_db: f64) -> Self {
        Self::new(vec![level_db])
    }
}

impl LevelFeed for ScriptedFeed {
    fn next_level(&mut self, _point: &MeasurementPoint) -> f64 {
        let level = self.levels[self.cursor.min(self.levels.len() - 1)];
        self.cursor += 1;
        level
    }

    fn is_simulated(&self) -> bool {
        false
    }
}
