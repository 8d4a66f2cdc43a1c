//! # nearby-types
//!
//! Core value types for the nearby search engine.
//!
//! - **Geographic types**: [`GeoPoint`](geo::GeoPoint), [`BoundingBox`](bbox::BoundingBox)
//! - **Listing types**: [`Item`](item::Item), [`ItemType`](item::ItemType), [`Category`](item::Category)
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use nearby_types::bbox::BoundingBox;
//! use nearby_types::geo::GeoPoint;
//!
//! let point = GeoPoint::new(12.9767, 77.5713); // Bangalore
//! let bbox = BoundingBox::new(12.8, 77.4, 13.1, 77.8);
//! assert!(bbox.contains(&point));
//! ```

pub mod bbox;
pub mod geo;
pub mod item;

pub use crate::bbox::BoundingBox;
pub use crate::geo::{GeoPoint, LatLng};
pub use crate::item::{Category, Item, ItemType, ParseLabelError};
