//! Public response shape.

use crate::query::proximity::CandidateItem;
use nearby_types::{Item, LatLng};
use serde::{Deserialize, Serialize};

/// A listing as returned to API clients.
///
/// Identifiers are strings, enumerations use their labels, and timestamps
/// are RFC 3339 with offset. `distance` is present only when the request
/// carried a center point; `-1` means the distance could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub location: LatLng,
    pub image: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl ItemResponse {
    fn from_item(item: Item, distance: Option<f64>) -> Self {
        Self {
            id: item.id.to_string(),
            item_type: item.item_type.label().to_string(),
            title: item.title,
            description: item.description,
            category: item.category.label().to_string(),
            start_date: item.start_date.to_rfc3339(),
            end_date: item.end_date.to_rfc3339(),
            address: item.address,
            location: item.location.into(),
            image: item.image,
            created_by: item.owner.to_string(),
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.to_rfc3339(),
            count: item.count,
            distance,
        }
    }
}

impl From<CandidateItem> for ItemResponse {
    fn from(candidate: CandidateItem) -> Self {
        let distance = candidate.distance.map(|d| d.as_wire());
        Self::from_item(candidate.item, distance)
    }
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self::from_item(item, None)
    }
}

/// Map survivors to responses, preserving order.
pub fn assemble(candidates: Vec<CandidateItem>) -> Vec<ItemResponse> {
    candidates.into_iter().map(ItemResponse::from).collect()
}
