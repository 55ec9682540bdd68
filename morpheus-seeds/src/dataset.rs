//! Seed datasets: points, routes and config in one JSON document

use std::{borrow::Cow, fs, path::Path};

use include_dir::{include_dir, Dir};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use morpheus_core::{
    constants::geo::MIN_PLAIN_DECIMAL_MAGNITUDE, Dashboard, GeoPoint, LocalizedText,
    MeasurementPoint, Route, RouteMetrics, ValidationError, ValidationResult, ZoneCategory,
    ZoneLimitTable,
};

use crate::{config::DashboardConfig, SeedError};

static SEED_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/seeds");

const DEFAULT_DATASET: &str = "default.json";

/// A coordinate as written in the seed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateText {
    /// Decimal text, precision kept as written
    Text(String),
    /// Bare JSON number, judged by its shortest decimal form
    Number(f64),
}

impl CoordinateText {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CoordinateText::Text(text) => Cow::Borrowed(text.as_str()),
            // Too small for a plain decimal; render it the way a float prints it
            CoordinateText::Number(value)
                if *value != 0.0 && value.abs() < MIN_PLAIN_DECIMAL_MAGNITUDE =>
            {
                Cow::Owned(format!("{:e}", value))
            }
            CoordinateText::Number(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for CoordinateText {
    fn from(text: &str) -> Self {
        CoordinateText::Text(text.to_owned())
    }
}

/// One measurement point record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeed {
    pub id: String,
    pub name: LocalizedText,
    pub zone: ZoneCategory,
    pub lat: CoordinateText,
    pub lng: CoordinateText,
    pub initial_db: f64,
    #[serde(default)]
    pub peak_db: Option<f64>,
    #[serde(default)]
    pub average_24h_db: Option<f64>,
}

impl PointSeed {
    pub fn position(&self) -> ValidationResult<GeoPoint> {
        GeoPoint::parse(&self.lat.as_text(), &self.lng.as_text())
    }

    /// Build the point against `zones`
    pub fn build(&self, zones: &ZoneLimitTable) -> ValidationResult<MeasurementPoint> {
        let mut point = MeasurementPoint::new(
            self.id.clone(),
            self.name.clone(),
            self.zone,
            zones.limits(self.zone),
            self.position()?,
            self.initial_db,
        )?;
        if let Some(peak) = self.peak_db {
            point = point.with_peak(peak);
        }
        if let Some(avg) = self.average_24h_db {
            point = point.with_average(avg);
        }
        Ok(point)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointSeed {
    pub lat: CoordinateText,
    pub lng: CoordinateText,
}

/// One planned route record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSeed {
    pub id: String,
    pub name: LocalizedText,
    pub color: String,
    #[serde(default)]
    pub metrics: RouteMetrics,
    pub waypoints: Vec<WaypointSeed>,
}

impl RouteSeed {
    /// Build the route; an invalid waypoint yields a non-renderable route
    pub fn build(&self) -> Route {
        let texts: Vec<(Cow<'_, str>, Cow<'_, str>)> = self
            .waypoints
            .iter()
            .map(|w| (w.lat.as_text(), w.lng.as_text()))
            .collect();

        Route::new(
            self.id.clone(),
            self.name.clone(),
            self.color.clone(),
            self.metrics.clone(),
            texts.iter().map(|(lat, lng)| (lat.as_ref(), lng.as_ref())),
        )
    }
}

/// A problem found in a dataset without building it
#[derive(Debug, Clone, PartialEq)]
pub enum SeedIssue {
    /// Zone overrides are broken; the dataset cannot be built at all
    Config(ValidationError),
    /// Point will be skipped
    Point { id: String, error: ValidationError },
    /// Route will not be drawn
    Route {
        id: String,
        waypoint: usize,
        error: ValidationError,
    },
}

/// A complete seed dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDataset {
    #[serde(default)]
    pub config: DashboardConfig,
    #[serde(default)]
    pub points: Vec<PointSeed>,
    #[serde(default)]
    pub routes: Vec<RouteSeed>,
}

impl SeedDataset {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            "loaded seed dataset {}: {} points, {} routes",
            path.display(),
            dataset.points.len(),
            dataset.routes.len()
        );
        Ok(dataset)
    }

    /// Dataset shipped with the crate (Hagen test area)
    pub fn load_default() -> Result<Self, SeedError> {
        Self::load_embedded(DEFAULT_DATASET)
    }

    /// Dataset embedded under `seeds/<name>`
    pub fn load_embedded(name: &str) -> Result<Self, SeedError> {
        let json = SEED_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| SeedError::MissingDataset(name.to_owned()))?;
        Self::from_json_str(json)
    }

    /// Names of the embedded datasets
    pub fn embedded_names() -> impl Iterator<Item = &'static str> {
        SEED_DIR
            .files()
            .filter_map(|file| file.path().to_str())
    }

    pub fn to_json_string(&self) -> Result<String, SeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every point that would be skipped and every route that would not draw
    ///
    /// A broken zone override comes first as [`SeedIssue::Config`]; points
    /// are then checked against the standard table.
    pub fn issues(&self) -> Vec<SeedIssue> {
        let (config, zones) = match self.config.checked_zone_table() {
            Ok(zones) => (None, zones),
            Err(error) => (Some(SeedIssue::Config(error)), ZoneLimitTable::standard()),
        };
        let points = self.points.iter().filter_map(|seed| {
            seed.build(&zones).err().map(|error| SeedIssue::Point {
                id: seed.id.clone(),
                error,
            })
        });
        let routes = self.routes.iter().filter_map(|seed| {
            seed.build().rejection().map(|r| SeedIssue::Route {
                id: seed.id.clone(),
                waypoint: r.waypoint,
                error: r.error.clone(),
            })
        });
        config.into_iter().chain(points).chain(routes).collect()
    }

    /// Build a dashboard
    ///
    /// Bad points are skipped, bad routes are kept as non-renderable. Only a
    /// broken zone override fails the whole build.
    pub fn to_dashboard(&self) -> Result<Dashboard, SeedError> {
        let zones = self.config.zone_table()?;
        let mut dashboard = Dashboard::new(zones, self.config.locale);

        let mut skipped = 0;
        let mut points = Vec::with_capacity(self.points.len());
        for seed in &self.points {
            match seed.build(dashboard.zones()) {
                Ok(point) => points.push(point),
                Err(e) => {
                    warn!("skipping point {}: {}", seed.id, e);
                    skipped += 1;
                }
            }
        }
        dashboard.extend(points);
        dashboard.extend(self.routes.iter().map(RouteSeed::build));

        info!(
            "dashboard ready: {} points ({} skipped), {} of {} routes renderable",
            dashboard.points().len(),
            skipped,
            dashboard.statistics().renderable_routes,
            dashboard.routes().len()
        );
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpheus_core::ComplianceStatus;

    #[test]
    fn default_dataset_loads_clean() {
        let dataset = SeedDataset::load_default().unwrap();
        assert_eq!(dataset.routes.len(), 3);
        assert!(dataset.points.len() >= 5);
        assert_eq!(dataset.issues(), Vec::new());
    }

    #[test]
    fn default_dataset_is_listed() {
        assert!(SeedDataset::embedded_names().any(|n| n == DEFAULT_DATASET));
        assert!(matches!(
            SeedDataset::load_embedded("missing.json"),
            Err(SeedError::MissingDataset(_))
        ));
    }

    #[test]
    fn numeric_coordinates_use_shortest_form() {
        let seed: WaypointSeed = serde_json::from_str(r#"{"lat": 51.371099, "lng": 7.69315}"#).unwrap();
        assert_eq!(seed.lat.as_text(), "51.371099");
        // 7.693150 as a number drops its trailing zero
        assert_eq!(seed.lng.as_text(), "7.69315");
    }

    #[test]
    fn tiny_numbers_count_as_exponential() {
        let seed = WaypointSeed {
            lat: CoordinateText::Number(1e-7),
            lng: CoordinateText::Number(0.0),
        };
        assert_eq!(seed.lat.as_text(), "1e-7");
        assert_eq!(seed.lng.as_text(), "0");
    }

    #[test]
    fn point_seed_builds_with_history() {
        let json = r#"{
            "id": "mp-x",
            "name": {"de": "Test", "en": "Test"},
            "zone": "hospital",
            "lat": "51.377000",
            "lng": "7.705000",
            "initial_db": 42.0,
            "peak_db": 49.0,
            "average_24h_db": 40.0
        }"#;
        let seed: PointSeed = serde_json::from_str(json).unwrap();
        let point = seed.build(&ZoneLimitTable::standard()).unwrap();
        assert_eq!(point.status(), ComplianceStatus::Warning);
        assert_eq!(point.peak_db(), 49.0);
        assert_eq!(point.average_24h_db(), 40.0);
    }

    #[test]
    fn dataset_round_trips_through_json() {
        let dataset = SeedDataset::load_default().unwrap();
        let json = dataset.to_json_string().unwrap();
        assert_eq!(SeedDataset::from_json_str(&json).unwrap(), dataset);
    }
}
