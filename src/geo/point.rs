//! Latitude/longitude point and haversine distance.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in decimal degrees.
///
/// Construction validates that both coordinates are finite and within
/// range, so every `Point` in circulation is a valid input to [`haversine`].
/// Deserialization accepts either `lng` or `lon` for the longitude.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
///
/// let p = Point::new(53.3498, -6.2603).unwrap();
/// assert_eq!(p.lat(), 53.3498);
/// assert!(Point::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, RoutingError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(RoutingError::InvalidPoint {
                reason: format!("non-finite coordinate ({lat}, {lng})"),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(RoutingError::InvalidPoint {
                reason: format!("latitude {lat} outside [-90, 90]"),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(RoutingError::InvalidPoint {
                reason: format!("longitude {lng} outside [-180, 180]"),
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine(self, other)
    }
}

/// Wire shape of a point: longitude may be spelled `lng` or `lon`.
#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: Option<f64>,
    lon: Option<f64>,
}

impl TryFrom<RawPoint> for Point {
    type Error = RoutingError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        let lng = raw.lng.or(raw.lon).ok_or_else(|| RoutingError::InvalidPoint {
            reason: "point must have a `lng` or `lon` field".to_string(),
        })?;
        Point::new(raw.lat, lng)
    }
}

/// Haversine great-circle distance between two points, in meters.
///
/// Symmetric, and exactly zero when both points are equal.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::{haversine, Point};
///
/// let a = Point::new(0.0, 0.0).unwrap();
/// let b = Point::new(0.0, 1.0).unwrap();
/// // One degree of longitude at the equator is about 111.19 km.
/// assert!((haversine(&a, &b) - 111_194.9).abs() < 1.0);
/// ```
pub fn haversine(p1: &Point, p2: &Point) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let phi1 = p1.lat.to_radians();
    let phi2 = p2.lat.to_radians();
    let d_phi = (p2.lat - p1.lat).to_radians();
    let d_lambda = (p2.lng - p1.lng).to_radians();

    let half_phi = (d_phi / 2.0).sin();
    let half_lambda = (d_lambda / 2.0).sin();
    let a = half_phi * half_phi + phi1.cos() * phi2.cos() * half_lambda * half_lambda;
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
