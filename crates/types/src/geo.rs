//! Geographic point type built on the `geo` crate.
//!
//! Coordinates are decimal degrees. Internally the point is stored as a
//! `geo::Point` with x = longitude and y = latitude, but the public surface
//! and the serialized form speak latitude/longitude.

use serde::{Deserialize, Serialize};

/// A geographic point with latitude/longitude coordinates.
///
/// Serializes as `{"lat": .., "lng": ..}`.
///
/// # Examples
///
/// ```
/// use nearby_types::geo::GeoPoint;
///
/// let bangalore = GeoPoint::new(12.9767, 77.5713);
/// assert_eq!(bangalore.lat(), 12.9767);
/// assert_eq!(bangalore.lng(), 77.5713);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLng", into = "LatLng")]
pub struct GeoPoint {
    inner: geo::Point<f64>,
}

/// Wire shape of a [`GeoPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    ///
    /// No range checking happens here; callers that accept untrusted input
    /// validate before constructing a query around the point.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            inner: geo::Point::new(lng, lat),
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.inner.y()
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lng(&self) -> f64 {
        self.inner.x()
    }

    /// Access the inner `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// True when both coordinates are finite and inside
    /// [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        let (lat, lng) = (self.lat(), self.lng());
        lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng)
    }
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        Self::new(value.lat, value.lng)
    }
}

impl From<GeoPoint> for LatLng {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat(),
            lng: point.lng(),
        }
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.inner
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lng())
    }
}
