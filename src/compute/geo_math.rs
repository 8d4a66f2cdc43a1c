//! Great-circle distance and radius bounding boxes on a spherical Earth.

use nearby_types::{BoundingBox, GeoPoint};
use thiserror::Error;

/// Mean Earth radius used by every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Why a radius bounding box could not be derived.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// The search circle reaches a pole, so no longitude band bounds it.
    #[error("search circle around latitude {lat} reaches a pole")]
    PolarRegion { lat: f64 },

    /// The longitude band crosses the +/-180 meridian.
    #[error("search circle around longitude {lng} wraps the antimeridian")]
    AntimeridianWrap { lng: f64 },

    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("bounding box edges are not finite")]
    NonFinite,
}

/// Haversine distance between two points in kilometers.
///
/// Symmetric, zero for identical points, never negative. Total over valid
/// coordinates; non-finite input yields a non-finite result.
///
/// # Examples
///
/// ```
/// use nearby::compute::geo_math::distance_km;
/// use nearby::GeoPoint;
///
/// let d = distance_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lng = (b.lng() - a.lng()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Rectangle enclosing every point within `radius_km` of `center`.
///
/// The latitude band is `center.lat +/- θ` and the longitude band uses
/// `asin(sin θ / cos lat)`, where `θ = radius_km / R`. The box is a superset
/// of the true circle and only serves as a storage prefilter.
///
/// Near the poles the arcsine argument exceeds 1 and the circle may cover a
/// pole outright; near the antimeridian the band leaves [-180, 180]. Both are
/// reported as errors rather than clamped.
///
/// # Examples
///
/// ```
/// use nearby::compute::geo_math::bounding_box;
/// use nearby::GeoPoint;
///
/// let center = GeoPoint::new(12.9767, 77.5713);
/// let bbox = bounding_box(&center, 20.0)?;
/// assert!(bbox.contains(&center));
///
/// assert!(bounding_box(&GeoPoint::new(89.99, 0.0), 20.0).is_err());
/// # Ok::<(), nearby::compute::geo_math::BoundsError>(())
/// ```
pub fn bounding_box(center: &GeoPoint, radius_km: f64) -> Result<BoundingBox, BoundsError> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(BoundsError::InvalidRadius(radius_km));
    }

    let angular = radius_km / EARTH_RADIUS_KM;
    let lat_delta = angular.to_degrees();
    let min_lat = center.lat() - lat_delta;
    let max_lat = center.lat() + lat_delta;

    if !min_lat.is_finite() || !max_lat.is_finite() {
        return Err(BoundsError::NonFinite);
    }
    if min_lat < -90.0 || max_lat > 90.0 {
        return Err(BoundsError::PolarRegion { lat: center.lat() });
    }

    let ratio = angular.sin() / center.lat().to_radians().cos();
    if ratio.is_nan() || ratio > 1.0 {
        return Err(BoundsError::PolarRegion { lat: center.lat() });
    }

    let lng_delta = ratio.asin().to_degrees();
    let min_lng = center.lng() - lng_delta;
    let max_lng = center.lng() + lng_delta;

    if !min_lng.is_finite() || !max_lng.is_finite() {
        return Err(BoundsError::NonFinite);
    }
    if min_lng < -180.0 || max_lng > 180.0 {
        return Err(BoundsError::AntimeridianWrap { lng: center.lng() });
    }

    Ok(BoundingBox::new(min_lat, min_lng, max_lat, max_lng))
}

/// Round a distance to one decimal place.
#[inline]
pub fn round_km(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}
