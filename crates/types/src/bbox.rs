use crate::geo::GeoPoint;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude rectangle.
///
/// Wraps `geo::Rect` (x = longitude, y = latitude). Used as a cheap
/// prefilter ahead of exact distance checks, so containment is inclusive on
/// every edge.
///
/// # Examples
///
/// ```
/// use nearby_types::bbox::BoundingBox;
/// use nearby_types::geo::GeoPoint;
///
/// let bbox = BoundingBox::new(12.8, 77.4, 13.1, 77.8);
/// assert!(bbox.contains(&GeoPoint::new(12.9767, 77.5713)));
/// assert!(!bbox.contains(&GeoPoint::new(19.0760, 72.8777)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    rect: Rect,
}

impl BoundingBox {
    /// Create a bounding box from its latitude and longitude extremes.
    ///
    /// `geo::Rect` normalizes the corners, so swapped arguments still yield
    /// a well-formed box.
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lng, y: min_lat },
                geo::coord! { x: max_lng, y: max_lat },
            ),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn min_lng(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    pub fn max_lng(&self) -> f64 {
        self.rect.max().x
    }

    /// Access the inner `geo::Rect`.
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Check whether a point lies inside the box, edges included.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat() >= self.min_lat()
            && point.lat() <= self.max_lat()
            && point.lng() >= self.min_lng()
            && point.lng() <= self.max_lng()
    }

    /// Latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    /// Longitude span in degrees.
    pub fn lng_span(&self) -> f64 {
        self.max_lng() - self.min_lng()
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{:.6}, {:.6}] lng [{:.6}, {:.6}]",
            self.min_lat(),
            self.max_lat(),
            self.min_lng(),
            self.max_lng()
        )
    }
}
