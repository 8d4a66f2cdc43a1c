//! Spatial math and input validation.

pub mod geo_math;
pub mod validation;

pub use geo_math::{BoundsError, EARTH_RADIUS_KM, bounding_box, distance_km, round_km};
