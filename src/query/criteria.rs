//! Filter criteria and the raw request parameters they are parsed from.

use crate::config::Config;
use crate::error::{NearbyError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use nearby_types::{Category, GeoPoint, ItemType};
use serde::Deserialize;

/// Center point and radius of a proximity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl Proximity {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }
}

/// Independently combinable search filters. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub item_type: Option<ItemType>,
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    /// Lower bound on the item's start date.
    pub start_date: Option<DateTime<FixedOffset>>,
    /// Upper bound on the item's start date.
    pub end_date: Option<DateTime<FixedOffset>>,
    /// Owner identity as received; parsed while building predicates.
    pub created_by: Option<String>,
    pub proximity: Option<Proximity>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn starting_after(mut self, bound: DateTime<FixedOffset>) -> Self {
        self.start_date = Some(bound);
        self
    }

    pub fn starting_before(mut self, bound: DateTime<FixedOffset>) -> Self {
        self.end_date = Some(bound);
        self
    }

    pub fn created_by(mut self, owner: impl Into<String>) -> Self {
        self.created_by = Some(owner.into());
        self
    }

    pub fn near(mut self, center: GeoPoint, radius_km: f64) -> Self {
        self.proximity = Some(Proximity::new(center, radius_km));
        self
    }
}

/// Query-string parameters of the listing endpoint, before interpretation.
///
/// Empty or whitespace-only strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub created_by: Option<String>,
}

impl SearchParams {
    /// Interpret raw parameters as [`FilterCriteria`].
    ///
    /// Unknown labels, unparseable dates, and a latitude without a longitude
    /// (or vice versa) are rejected with [`NearbyError::InvalidInput`]. The
    /// creator identity is passed through untouched.
    pub fn into_criteria(self, config: &Config) -> Result<FilterCriteria> {
        let category = non_empty(self.category)
            .map(|label| {
                label
                    .parse::<Category>()
                    .map_err(|e| NearbyError::InvalidInput(e.to_string()))
            })
            .transpose()?;

        let item_type = non_empty(self.item_type)
            .map(|label| {
                label
                    .parse::<ItemType>()
                    .map_err(|e| NearbyError::InvalidInput(e.to_string()))
            })
            .transpose()?;

        let start_date = non_empty(self.start_date)
            .map(|s| parse_date_bound(&s))
            .transpose()?;
        let end_date = non_empty(self.end_date)
            .map(|s| parse_date_bound(&s))
            .transpose()?;

        let proximity = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Proximity::new(
                GeoPoint::new(lat, lng),
                self.radius.unwrap_or(config.default_radius_km),
            )),
            (None, None) => None,
            _ => {
                return Err(NearbyError::InvalidInput(
                    "lat and lng must be supplied together".to_string(),
                ));
            }
        };

        Ok(FilterCriteria {
            category,
            item_type,
            search: non_empty(self.search),
            start_date,
            end_date,
            created_by: non_empty(self.created_by),
            proximity,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a date bound.
///
/// Accepts RFC 3339 (`2025-03-01T19:00:00+05:30`, `2025-03-01T13:30:00.000Z`),
/// a naive date-time taken as UTC (`2025-03-01T19:00:00`), or a bare date
/// taken as UTC midnight (`2025-03-01`).
pub fn parse_date_bound(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().fixed_offset());
    }

    Err(NearbyError::InvalidInput(format!(
        "Unrecognized date: {:?}",
        value
    )))
}
