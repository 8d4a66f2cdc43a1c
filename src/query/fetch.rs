//! Single round trip from a predicate set to candidate rows.

use crate::error::{NearbyError, Result};
use crate::query::predicate::PredicateSet;
use crate::storage::ItemStore;
use nearby_types::Item;

/// Issues exactly one query against an [`ItemStore`].
pub struct CandidateFetcher<'a> {
    store: &'a dyn ItemStore,
}

impl<'a> CandidateFetcher<'a> {
    pub fn new(store: &'a dyn ItemStore) -> Self {
        Self { store }
    }

    /// Execute the predicates once. Failures are not retried; anything other
    /// than a storage error coming back from the adapter is reported as one.
    pub async fn fetch(&self, predicates: &PredicateSet) -> Result<Vec<Item>> {
        log::debug!("Fetching candidates where {}", predicates);

        let candidates = self.store.execute(predicates).await.map_err(|e| match e {
            NearbyError::Storage(_) => e,
            other => NearbyError::Storage(other.to_string()),
        })?;

        log::debug!("Query returned {} candidates", candidates.len());
        Ok(candidates)
    }
}
