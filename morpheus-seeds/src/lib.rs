//! Seed Data and Configuration for the MORPHEUS Dashboard
//!
//! ## Overview
//!
//! A dashboard session starts from a seed dataset: the measurement points,
//! the planned flight routes, and a `config` section for the refresh loop
//! and the simulator. Datasets are JSON so they can be edited by hand and
//! shared with the map frontend.
//!
//! ```json
//! {
//!   "config": { "refresh_interval_ms": 5000, "seed": 42, "locale": "de" },
//!   "points": [
//!     {
//!       "id": "mp-lab",
//!       "name": { "de": "Labor", "en": "Laboratory" },
//!       "zone": "commercial",
//!       "lat": "51.373000",
//!       "lng": "7.701000",
//!       "initial_db": 52.3
//!     }
//!   ],
//!   "routes": []
//! }
//! ```
//!
//! ## Coordinates Are Text
//!
//! JSON numbers lose trailing zeros on the way through a float: `51.373000`
//! arrives as `51.373` and would fail the six-digit precision check. Seed
//! files therefore write coordinates as strings. Bare numbers are still
//! accepted and checked in their shortest decimal form.
//!
//! ## Failure Policy
//!
//! - A point with a bad coordinate is skipped and logged; the rest load.
//! - A route with one bad waypoint is kept but not renderable.
//! - A zone limit override of zero or below stops the load.
//!
//! ## Usage
//!
//! ```rust
//! use morpheus_seeds::SeedDataset;
//!
//! let dataset = SeedDataset::load_default()?;
//! let dashboard = dataset.to_dashboard()?;
//! assert!(!dashboard.points().is_empty());
//! # Ok::<(), morpheus_seeds::SeedError>(())
//! ```

use morpheus_core::ValidationError;
use thiserror::Error;

pub mod config;
pub mod dataset;

pub use config::{DashboardConfig, ZoneOverride};
pub use dataset::{CoordinateText, PointSeed, RouteSeed, SeedDataset, SeedIssue, WaypointSeed};

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("embedded dataset not found: {0}")]
    MissingDataset(String),
}
