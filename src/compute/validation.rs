//! Validation for geographic coordinates and search radii.

use crate::error::{NearbyError, Result};
use nearby_types::GeoPoint;

/// Half of Earth's circumference in kilometers: no two points are farther
/// apart than this on the sphere.
pub const MAX_SURFACE_DISTANCE_KM: f64 = 20_037.5;

/// Validates a point has finite latitude in [-90, 90] and longitude in
/// [-180, 180].
///
/// # Examples
///
/// ```
/// use nearby::compute::validation::validate_point;
/// use nearby::GeoPoint;
///
/// assert!(validate_point(&GeoPoint::new(12.9767, 77.5713)).is_ok());
/// assert!(validate_point(&GeoPoint::new(95.0, 0.0)).is_err());
/// assert!(validate_point(&GeoPoint::new(0.0, 200.0)).is_err());
/// ```
pub fn validate_point(point: &GeoPoint) -> Result<()> {
    let (lat, lng) = (point.lat(), point.lng());

    if !lat.is_finite() {
        return Err(NearbyError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(NearbyError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(NearbyError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(NearbyError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates a search radius in kilometers against an upper bound.
///
/// The radius must be finite, strictly positive, and no larger than
/// `max_km` (which itself never exceeds [`MAX_SURFACE_DISTANCE_KM`]).
///
/// # Examples
///
/// ```
/// use nearby::compute::validation::validate_radius;
///
/// assert!(validate_radius(20.0, 500.0).is_ok());
/// assert!(validate_radius(0.0, 500.0).is_err());
/// assert!(validate_radius(-1.0, 500.0).is_err());
/// assert!(validate_radius(f64::NAN, 500.0).is_err());
/// assert!(validate_radius(600.0, 500.0).is_err());
/// ```
pub fn validate_radius(radius_km: f64, max_km: f64) -> Result<()> {
    if !radius_km.is_finite() {
        return Err(NearbyError::InvalidInput(format!(
            "Radius must be finite, got: {}",
            radius_km
        )));
    }
    if radius_km <= 0.0 {
        return Err(NearbyError::InvalidInput(format!(
            "Radius must be positive, got: {}",
            radius_km
        )));
    }
    let max_km = max_km.min(MAX_SURFACE_DISTANCE_KM);
    if radius_km > max_km {
        return Err(NearbyError::InvalidInput(format!(
            "Radius {} km exceeds the maximum of {} km",
            radius_km, max_km
        )));
    }
    Ok(())
}
