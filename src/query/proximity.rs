//! Exact distance filtering of candidate rows.

use crate::compute::geo_math::{distance_km, round_km};
use crate::compute::validation::validate_point;
use crate::query::criteria::Proximity;
use nearby_types::Item;

/// Distance annotation attached to a surviving candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Kilometers from the center, rounded to one decimal.
    Km(f64),
    /// The stored location could not be measured.
    Unknown,
}

impl Distance {
    /// Value written to the public `distance` field. `Unknown` becomes the
    /// sentinel `-1.0`, which callers must special-case.
    pub const UNKNOWN_SENTINEL: f64 = -1.0;

    pub fn as_wire(&self) -> f64 {
        match self {
            Distance::Km(km) => *km,
            Distance::Unknown => Self::UNKNOWN_SENTINEL,
        }
    }
}

/// A candidate that passed the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateItem {
    pub item: Item,
    /// `None` when the request had no center point.
    pub distance: Option<Distance>,
}

/// Post-filters candidates against the exact great-circle radius.
pub struct ProximityFilter {
    proximity: Option<Proximity>,
}

/// Outcome of measuring one row.
enum Measured {
    Within(f64),
    Outside,
    Unmeasurable,
}

impl ProximityFilter {
    pub fn new(proximity: Option<Proximity>) -> Self {
        Self { proximity }
    }

    /// Keep candidates within the radius (boundary inclusive) and annotate
    /// them; rows whose stored location cannot be measured are kept with
    /// [`Distance::Unknown`]. Without a center every candidate passes
    /// unannotated. Input order is preserved.
    pub fn apply(&self, candidates: Vec<Item>) -> Vec<CandidateItem> {
        let Some(proximity) = self.proximity else {
            return candidates
                .into_iter()
                .map(|item| CandidateItem {
                    item,
                    distance: None,
                })
                .collect();
        };

        let total = candidates.len();
        let survivors: Vec<CandidateItem> = candidates
            .into_iter()
            .filter_map(|item| {
                let distance = match measure(&proximity, &item) {
                    Measured::Within(km) => Distance::Km(round_km(km)),
                    Measured::Outside => return None,
                    Measured::Unmeasurable => {
                        log::warn!(
                            "Cannot compute distance for item {} at {}; keeping it with unknown distance",
                            item.id,
                            item.location
                        );
                        Distance::Unknown
                    }
                };
                Some(CandidateItem {
                    item,
                    distance: Some(distance),
                })
            })
            .collect();

        log::debug!(
            "Proximity filter kept {} of {} candidates (filtered out {})",
            survivors.len(),
            total,
            total - survivors.len()
        );
        survivors
    }
}

fn measure(proximity: &Proximity, item: &Item) -> Measured {
    if validate_point(&item.location).is_err() {
        return Measured::Unmeasurable;
    }
    let km = distance_km(&proximity.center, &item.location);
    if !km.is_finite() {
        Measured::Unmeasurable
    } else if km > proximity.radius_km {
        Measured::Outside
    } else {
        Measured::Within(km)
    }
}
