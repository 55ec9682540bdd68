//! Dashboard entities: measurement points and flight routes
//!
//! ## Invariants
//!
//! `MeasurementPoint`:
//! - `status` always matches `current_db` against the day limit. The level
//!   can only change through [`MeasurementPoint::set_level`], which
//!   reclassifies in the same call.
//! - `peak_db >= current_db` after every update, and the peak never drops
//!   except through [`MeasurementPoint::reset_peak`].
//!
//! `Route`:
//! - Either every waypoint validated and all of them are kept, or the route
//!   keeps none and is not renderable. There is no partially drawn route.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    classify::{Classification, ComplianceStatus, ThresholdClassifier},
    errors::{ValidationError, ValidationResult},
    geo::{path_length_m, GeoPoint},
    history::LevelHistory,
    locale::{Locale, LocalizedText},
    time::Timestamp,
    zones::{DayNightLimits, ZoneCategory},
};

/// A fixed noise measurement location
#[derive(Debug, Clone)]
pub struct MeasurementPoint {
    id: String,
    name: LocalizedText,
    zone: ZoneCategory,
    limits: DayNightLimits,
    position: GeoPoint,
    current_db: f64,
    peak_db: f64,
    history: LevelHistory,
    classification: Classification,
}

impl MeasurementPoint {
    /// Create a point from seed values
    ///
    /// The initial status is computed here; a seed peak below the initial
    /// level is raised to it.
    pub fn new(
        id: impl Into<String>,
        name: LocalizedText,
        zone: ZoneCategory,
        limits: DayNightLimits,
        position: GeoPoint,
        initial_db: f64,
    ) -> ValidationResult<Self> {
        let classification = ThresholdClassifier::default().classify(initial_db, limits.day_db())?;
        Ok(Self {
            id: id.into(),
            name,
            zone,
            limits,
            position,
            current_db: initial_db,
            peak_db: initial_db,
            history: LevelHistory::new(),
            classification,
        })
    }

    /// Seed a peak recorded before this session
    pub fn with_peak(mut self, peak_db: f64) -> Self {
        if peak_db.is_finite() {
            self.peak_db = self.peak_db.max(peak_db);
        }
        self
    }

    /// Seed a prior 24-hour average
    pub fn with_average(mut self, average_db: f64) -> Self {
        if average_db.is_finite() {
            self.history = LevelHistory::with_baseline(average_db);
        }
        self
    }

    /// Apply a new level, raise the peak, and reclassify
    ///
    /// A non-finite level is rejected and the point stays unchanged.
    pub fn set_level(&mut self, level_db: f64, timestamp: Timestamp) -> ValidationResult<ComplianceStatus> {
        let classification = ThresholdClassifier::default().classify(level_db, self.limits.day_db())?;

        self.current_db = level_db;
        if level_db > self.peak_db {
            self.peak_db = level_db;
        }
        self.history.record(level_db, timestamp);
        self.classification = classification;
        Ok(classification.status)
    }

    /// Drop the peak back to the current level
    pub fn reset_peak(&mut self) {
        self.peak_db = self.current_db;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }

    pub fn zone(&self) -> ZoneCategory {
        self.zone
    }

    pub fn limits(&self) -> DayNightLimits {
        self.limits
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn current_db(&self) -> f64 {
        self.current_db
    }

    pub fn peak_db(&self) -> f64 {
        self.peak_db
    }

    pub fn status(&self) -> ComplianceStatus {
        self.classification.status
    }

    /// Utilization of the day limit in percent
    pub fn utilization_pct(&self) -> f64 {
        self.classification.utilization_pct()
    }

    /// Energetic 24-hour average, falling back to the current level
    pub fn average_24h_db(&self) -> f64 {
        self.history.average_db().unwrap_or(self.current_db)
    }
}

/// Summary figures shown next to a route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub duration_min: f64,
    /// Noise exposure along the path, dB(A)
    pub noise_exposure_db: f64,
    pub energy_wh: f64,
    pub compliant: bool,
}

/// Why a route is not drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRejection {
    /// Zero-based index of the first failing waypoint
    pub waypoint: usize,
    pub error: ValidationError,
}

/// A planned flight path
#[derive(Debug, Clone)]
pub struct Route {
    id: String,
    name: LocalizedText,
    color: String,
    metrics: RouteMetrics,
    waypoints: Vec<GeoPoint>,
    rejection: Option<RouteRejection>,
}

impl Route {
    /// Build a route from waypoint text, validating all-or-nothing
    ///
    /// Validation stops at the first bad waypoint; the route then keeps no
    /// waypoints at all.
    pub fn new<'a, I>(
        id: impl Into<String>,
        name: LocalizedText,
        color: impl Into<String>,
        metrics: RouteMetrics,
        waypoints: I,
    ) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let id = id.into();
        let parsed: Result<Vec<GeoPoint>, RouteRejection> = waypoints
            .into_iter()
            .enumerate()
            .map(|(index, (lat, lng))| {
                GeoPoint::parse(lat, lng).map_err(|error| RouteRejection { waypoint: index, error })
            })
            .collect();

        let (waypoints, rejection) = match parsed {
            Ok(points) => (points, None),
            Err(rejection) => {
                warn!(
                    "route {} not rendered: waypoint {} invalid ({})",
                    id, rejection.waypoint, rejection.error
                );
                (Vec::new(), Some(rejection))
            }
        };

        Self {
            id,
            name,
            color: color.into(),
            metrics,
            waypoints,
            rejection,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn metrics(&self) -> &RouteMetrics {
        &self.metrics
    }

    pub fn is_renderable(&self) -> bool {
        self.rejection.is_none()
    }

    pub fn rejection(&self) -> Option<&RouteRejection> {
        self.rejection.as_ref()
    }

    /// Waypoints to draw; empty when the route is not renderable
    pub fn rendered_waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    /// Length of the drawn path in metres
    pub fn path_length_m(&self) -> f64 {
        path_length_m(&self.waypoints)
    }
}
