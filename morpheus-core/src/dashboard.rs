//! Dashboard state and render snapshots
//!
//! [`Dashboard`] owns every measurement point and route. There is no global
//! instance: the host creates one, hands it by `&mut` to the refresh pass and
//! by `&` to [`Dashboard::snapshot`] when it needs something to draw.
//!
//! A refresh pass asks a [`LevelFeed`] for one level per point, applies it,
//! and then recomputes [`Statistics`] over the whole set.

use log::{debug, warn};
use serde::Serialize;

use crate::{
    acoustics::{ComplianceCheck, TimePeriod},
    classify::ComplianceStatus,
    errors::ValidationResult,
    geo::GeoPoint,
    locale::{LabelSet, Locale},
    model::{MeasurementPoint, Route, RouteMetrics},
    time::Timestamp,
    traits::LevelFeed,
    zones::{ZoneCategory, ZoneLimitTable},
};

/// Aggregate figures over all points and routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub compliant: usize,
    pub warning: usize,
    pub critical: usize,
    /// Arithmetic mean of current levels, `None` without points
    pub mean_level_db: Option<f64>,
    pub max_level_db: Option<f64>,
    /// Share of compliant points in `[0, 1]`
    pub compliance_rate: f64,
    pub renderable_routes: usize,
    pub total_routes: usize,
}

impl Statistics {
    pub fn compute(points: &[MeasurementPoint], routes: &[Route]) -> Self {
        let mut stats = Statistics {
            total_routes: routes.len(),
            renderable_routes: routes.iter().filter(|r| r.is_renderable()).count(),
            ..Default::default()
        };

        let mut sum = 0.0;
        for point in points {
            match point.status() {
                ComplianceStatus::Compliant => stats.compliant += 1,
                ComplianceStatus::Warning => stats.warning += 1,
                ComplianceStatus::Critical => stats.critical += 1,
            }
            let level = point.current_db();
            sum += level;
            stats.max_level_db = Some(stats.max_level_db.map_or(level, |max: f64| max.max(level)));
        }

        if !points.is_empty() {
            let n = points.len() as f64;
            stats.mean_level_db = Some(sum / n);
            stats.compliance_rate = stats.compliant as f64 / n;
        }
        stats
    }

    pub fn point_count(&self) -> usize {
        self.compliant + self.warning + self.critical
    }
}

/// One point as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub zone: ZoneCategory,
    pub position: GeoPoint,
    pub current_db: f64,
    pub peak_db: f64,
    pub status: ComplianceStatus,
    pub status_label: &'static str,
    pub utilization_pct: f64,
    pub average_24h_db: f64,
}

/// One route as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: &'a str,
    pub renderable: bool,
    /// Empty when not renderable
    pub waypoints: &'a [GeoPoint],
    pub length_m: f64,
    pub metrics: &'a RouteMetrics,
}

/// Read-only view of the dashboard in one locale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub locale: Locale,
    pub labels: &'static LabelSet,
    /// Levels come from the simulator, not from sensors
    pub simulated: bool,
    pub refreshed_at: Option<Timestamp>,
    pub passes: u64,
    pub points: Vec<PointView<'a>>,
    pub routes: Vec<RouteView<'a>>,
    pub stats: Statistics,
}

/// Outcome of one refresh pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub updated: usize,
    pub skipped: usize,
}

/// Owned dashboard state
#[derive(Debug, Clone)]
pub struct Dashboard {
    points: Vec<MeasurementPoint>,
    routes: Vec<Route>,
    zones: ZoneLimitTable,
    locale: Locale,
    stats: Statistics,
    passes: u64,
    simulated: bool,
    refreshed_at: Option<Timestamp>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ZoneLimitTable::standard(), Locale::default())
    }
}

impl Dashboard {
    pub fn new(zones: ZoneLimitTable, locale: Locale) -> Self {
        Self {
            points: Vec::new(),
            routes: Vec::new(),
            zones,
            locale,
            stats: Statistics::default(),
            passes: 0,
            simulated: false,
            refreshed_at: None,
        }
    }

    /// Add one point; use `extend` when seeding many
    pub fn add_point(&mut self, point: MeasurementPoint) {
        self.points.push(point);
        self.recompute_stats();
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
        self.recompute_stats();
    }

    fn recompute_stats(&mut self) {
        self.stats = Statistics::compute(&self.points, &self.routes);
    }

    /// Run one full pass: every point gets a new level, then stats refresh
    ///
    /// A level the feed gets wrong is logged and that point keeps its old
    /// value; the rest of the pass carries on.
    pub fn refresh<F: LevelFeed>(&mut self, feed: &mut F, now: Timestamp) -> RefreshReport {
        let mut report = RefreshReport::default();

        for point in &mut self.points {
            let level = feed.next_level(point);
            match point.set_level(level, now) {
                Ok(_) => report.updated += 1,
                Err(e) => {
                    warn!("point {}: level {} rejected ({})", point.id(), level, e);
                    report.skipped += 1;
                }
            }
        }

        self.recompute_stats();
        self.passes += 1;
        self.simulated = feed.is_simulated();
        self.refreshed_at = Some(now);

        debug!(
            "refresh pass {}: {} updated, {} skipped, {} critical",
            self.passes, report.updated, report.skipped, self.stats.critical
        );
        report
    }

    /// Build the render view in `locale`
    pub fn snapshot(&self, locale: Locale) -> Snapshot<'_> {
        let points = self
            .points
            .iter()
            .map(|p| PointView {
                id: p.id(),
                name: p.name(locale),
                zone: p.zone(),
                position: p.position(),
                current_db: p.current_db(),
                peak_db: p.peak_db(),
                status: p.status(),
                status_label: p.status().label(locale),
                utilization_pct: p.utilization_pct(),
                average_24h_db: p.average_24h_db(),
            })
            .collect();

        let routes = self
            .routes
            .iter()
            .map(|r| RouteView {
                id: r.id(),
                name: r.name(locale),
                color: r.color(),
                renderable: r.is_renderable(),
                waypoints: r.rendered_waypoints(),
                length_m: r.path_length_m(),
                metrics: r.metrics(),
            })
            .collect();

        Snapshot {
            locale,
            labels: LabelSet::for_locale(locale),
            simulated: self.simulated,
            refreshed_at: self.refreshed_at,
            passes: self.passes,
            points,
            routes,
            stats: self.stats,
        }
    }

    /// Snapshot in the dashboard's own locale
    pub fn current_snapshot(&self) -> Snapshot<'_> {
        self.snapshot(self.locale)
    }

    /// Day/night limit check for every point at `now`
    pub fn compliance_report(&self, now: Timestamp) -> ValidationResult<Vec<ComplianceCheck>> {
        let period = TimePeriod::at(now);
        self.points
            .iter()
            .map(|p| ComplianceCheck::evaluate(p.current_db(), p.zone(), &p.limits(), period))
            .collect()
    }

    pub fn reset_peaks(&mut self) {
        for point in &mut self.points {
            point.reset_peak();
        }
    }

    pub fn point(&self, id: &str) -> Option<&MeasurementPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }

    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn zones(&self) -> &ZoneLimitTable {
        &self.zones
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }
}

/// Bulk insert; statistics are recomputed once per batch
impl Extend<MeasurementPoint> for Dashboard {
    fn extend<I: IntoIterator<Item = MeasurementPoint>>(&mut self, points: I) {
        self.points.extend(points);
        self.recompute_stats();
    }
}

impl Extend<Route> for Dashboard {
    fn extend<I: IntoIterator<Item = Route>>(&mut self, routes: I) {
        self.routes.extend(routes);
        self.recompute_stats();
    }
}
