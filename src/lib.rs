//! Proximity search and filter composition for geo-anchored listings.
//!
//! ```rust
//! use nearby::{GeoPoint, bounding_box, distance_km};
//!
//! let center = GeoPoint::new(12.9767, 77.5713);
//! let bbox = bounding_box(&center, 20.0)?;
//!
//! let whitefield = GeoPoint::new(12.9698, 77.7500);
//! assert!(bbox.contains(&whitefield));
//! assert!(distance_km(&center, &whitefield) <= 20.0);
//! # Ok::<(), nearby::BoundsError>(())
//! ```
//!
//! Searches run through [`NearbySearch`], which composes the filters in a
//! [`FilterCriteria`] into one storage query and then drops candidates that
//! the exact great-circle distance puts outside the radius.

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod query;
pub mod search;
pub mod storage;

pub use builder::SearchBuilder;
pub use config::Config;
pub use error::{NearbyError, Result};
pub use search::NearbySearch;

pub use nearby_types::{BoundingBox, Category, GeoPoint, Item, ItemType, LatLng, ParseLabelError};

pub use compute::{BoundsError, EARTH_RADIUS_KM, bounding_box, distance_km, round_km};

pub use query::{
    CandidateItem, Distance, FilterCriteria, ItemResponse, Predicate, PredicateBuilder,
    PredicateSet, Proximity, SearchParams,
};

pub use storage::{ItemStore, MemoryItemStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{NearbyError, NearbySearch, Result, SearchBuilder};

    pub use crate::{Category, GeoPoint, Item, ItemType};

    pub use crate::{FilterCriteria, ItemResponse, SearchParams};

    pub use crate::{ItemStore, MemoryItemStore};

    pub use crate::Config;
}
