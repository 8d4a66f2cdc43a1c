//! Listing entity and its enumerated attributes.

use crate::geo::GeoPoint;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {} label: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseLabelError {}

/// Kind of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Event,
    Deal,
}

impl ItemType {
    pub const ALL: [ItemType; 2] = [ItemType::Event, ItemType::Deal];

    /// Canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Event => "event",
            ItemType::Deal => "deal",
        }
    }
}

impl FromStr for ItemType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ParseLabelError::new("type", s))
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Music,
    Workshop,
    Sale,
    #[serde(rename = "Community Meetup")]
    CommunityMeetup,
    #[serde(rename = "Garage Sale")]
    GarageSale,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Music,
        Category::Workshop,
        Category::Sale,
        Category::CommunityMeetup,
        Category::GarageSale,
    ];

    /// Canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Music => "Music",
            Category::Workshop => "Workshop",
            Category::Sale => "Sale",
            Category::CommunityMeetup => "Community Meetup",
            Category::GarageSale => "Garage Sale",
        }
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseLabelError::new("category", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A geographically anchored listing (event or deal).
///
/// Read-only from the search engine's point of view. The serde form is the
/// storage/seed shape, not the public response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub address: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub image: Option<String>,
    pub owner: Uuid,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    /// View/interaction counter.
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        for item_type in ItemType::ALL {
            assert_eq!(item_type.label().parse::<ItemType>().unwrap(), item_type);
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!("food".parse::<Category>().is_err());
        assert!("EVENT".parse::<ItemType>().is_err());
        let err = "Concert".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category label: \"Concert\"");
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(
            serde_json::to_string(&Category::CommunityMeetup).unwrap(),
            "\"Community Meetup\""
        );
        assert_eq!(serde_json::to_string(&ItemType::Deal).unwrap(), "\"deal\"");
    }

    #[test]
    fn test_item_deserializes_from_seed_shape() {
        let json = r#"{
            "id": "6f1c1f0e-8d9a-4a43-9a53-3b8b6f3f0f11",
            "type": "event",
            "title": "Jazz night",
            "description": "Live quartet",
            "category": "Music",
            "start_date": "2025-03-01T19:00:00+05:30",
            "end_date": "2025-03-01T23:00:00+05:30",
            "address": "MG Road",
            "location": {"lat": 12.9767, "lng": 77.5713},
            "owner": "0b6a0a4e-2f43-4f0e-9c39-7a4f2d0f5e21",
            "created_at": "2025-02-01T10:00:00+00:00",
            "updated_at": "2025-02-01T10:00:00+00:00"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Event);
        assert_eq!(item.category, Category::Music);
        assert_eq!(item.location, GeoPoint::new(12.9767, 77.5713));
        assert_eq!(item.image, None);
        assert_eq!(item.count, 0);
        assert_eq!(item.start_date.offset().local_minus_utc(), 5 * 3600 + 1800);
    }
}
