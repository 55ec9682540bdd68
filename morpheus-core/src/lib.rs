//! Core engine for the MORPHEUS drone noise dashboard
//!
//! Validates coordinates, classifies noise levels against zone limits, and
//! keeps the dashboard state that a renderer draws from. Levels come from a
//! [`LevelFeed`]; the one shipped here is the [`SampleSimulator`].
//!
//! Key rules:
//! - Coordinates carry exactly six fractional digits, no exponents
//! - Status is `level / day_limit`: critical from 1.0, warning from 0.9
//! - A route with any bad waypoint is not drawn at all
//!
//! ```
//! use morpheus_core::{
//!     Dashboard, FixedTime, GeoPoint, LocalizedText, Locale, MeasurementPoint,
//!     RefreshTimer, SampleSimulator, SimulatorConfig, ZoneCategory,
//! };
//!
//! let mut dashboard = Dashboard::default();
//! let limits = dashboard.zones().limits(ZoneCategory::Residential);
//! let point = MeasurementPoint::new(
//!     "mp-1",
//!     LocalizedText::new("Wohngebiet", "Residential"),
//!     ZoneCategory::Residential,
//!     limits,
//!     GeoPoint::parse("51.373000", "7.701000")?,
//!     48.0,
//! )?;
//! dashboard.add_point(point);
//!
//! let mut sim = SampleSimulator::seeded(SimulatorConfig::default(), 1);
//! let mut timer = RefreshTimer::new(5_000, FixedTime::new(0));
//! timer.time_source_mut().advance(5_000);
//! assert!(timer.poll(&mut dashboard, &mut sim));
//!
//! let snapshot = dashboard.snapshot(Locale::En);
//! assert!(snapshot.simulated);
//! # Ok::<(), morpheus_core::ValidationError>(())
//! ```

#![deny(unsafe_code)]

pub mod acoustics;
pub mod classify;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod geo;
pub mod history;
pub mod locale;
pub mod model;
pub mod simulate;
pub mod time;
pub mod timer;
pub mod traits;
pub mod validators;
pub mod zones;

// Public API
pub use classify::{classify, utilization, Classification, ComplianceStatus, ThresholdClassifier};
pub use dashboard::{Dashboard, PointView, RefreshReport, RouteView, Snapshot, Statistics};
pub use errors::{Axis, ValidationError, ValidationResult};
pub use geo::GeoPoint;
pub use locale::{LabelSet, Locale, LocalizedText};
pub use model::{MeasurementPoint, Route, RouteMetrics, RouteRejection};
pub use simulate::{SampleSimulator, SimulatorConfig};
pub use time::{FixedTime, SystemTime, TimeSource, Timestamp};
pub use timer::RefreshTimer;
pub use traits::{LevelFeed, Validator};
pub use validators::{validate_coordinate, CoordinateValidator};
pub use zones::{DayNightLimits, ZoneCategory, ZoneLimit, ZoneLimitTable};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
