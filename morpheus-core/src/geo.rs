//! Validated geographic positions

use serde::Serialize;

use crate::{
    constants::geo::EARTH_RADIUS_M,
    errors::ValidationResult,
    validators::CoordinateValidator,
};

/// A WGS84 position that passed the coordinate validator
///
/// The only constructors run both axes through [`CoordinateValidator`], so
/// holding a `GeoPoint` means the position may be handed to the map layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Parse a position from decimal text, e.g. `("51.371099", "7.693150")`
    pub fn parse(lat: &str, lng: &str) -> ValidationResult<Self> {
        Ok(Self {
            lat: CoordinateValidator::latitude().parse(lat)?,
            lng: CoordinateValidator::longitude().parse(lng)?,
        })
    }

    /// Validate numeric degrees by their shortest decimal form
    pub fn from_degrees(lat: f64, lng: f64) -> ValidationResult<Self> {
        Ok(Self {
            lat: CoordinateValidator::latitude().parse_degrees(lat)?,
            lng: CoordinateValidator::longitude().parse_degrees(lng)?,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance in metres (haversine)
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Total length of a polyline in metres
pub fn path_length_m(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance_m(&pair[1])).sum()
}
