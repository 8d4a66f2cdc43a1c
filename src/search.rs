//! The listing search pipeline.

use crate::builder::SearchBuilder;
use crate::compute::validation::{validate_point, validate_radius};
use crate::config::Config;
use crate::error::{NearbyError, Result};
use crate::query::{
    CandidateFetcher, FilterCriteria, ItemResponse, PredicateBuilder, ProximityFilter,
    SearchParams, assemble,
};
use crate::storage::ItemStore;
use std::sync::Arc;
use uuid::Uuid;

/// Proximity and attribute search over an [`ItemStore`].
///
/// Cheap to clone; every call is an independent request with no shared
/// mutable state.
#[derive(Clone)]
pub struct NearbySearch {
    store: Arc<dyn ItemStore>,
    config: Config,
}

impl NearbySearch {
    /// Create a pipeline over `store` with the given configuration.
    pub fn new(store: Arc<dyn ItemStore>, config: Config) -> Result<Self> {
        config.validate().map_err(NearbyError::Config)?;
        Ok(Self { store, config })
    }

    pub fn builder() -> SearchBuilder {
        SearchBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    /// Run one search.
    ///
    /// Stages: validate the proximity input, compose predicates, fetch
    /// candidates in a single storage round trip, drop candidates outside the
    /// radius, and shape the survivors for the response. An unparseable
    /// creator identity yields an empty list rather than an error; a storage
    /// failure fails the whole request.
    pub async fn search(&self, criteria: FilterCriteria) -> Result<Vec<ItemResponse>> {
        self.validate(&criteria)?;

        let predicates = match PredicateBuilder::build(&criteria) {
            Ok(predicates) => predicates,
            Err(NearbyError::InvalidFilter(reason)) => {
                log::warn!("Returning no items: {}", reason);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let candidates = CandidateFetcher::new(self.store.as_ref())
            .fetch(&predicates)
            .await?;
        let survivors = ProximityFilter::new(criteria.proximity).apply(candidates);

        log::debug!("Returning {} items", survivors.len());
        Ok(assemble(survivors))
    }

    /// Interpret raw query parameters, then [`search`](Self::search).
    pub async fn search_params(&self, params: SearchParams) -> Result<Vec<ItemResponse>> {
        let criteria = params.into_criteria(&self.config)?;
        self.search(criteria).await
    }

    /// Look up one listing by its identity string. No distance is attached.
    pub async fn get(&self, id: &str) -> Result<Option<ItemResponse>> {
        let id = Uuid::parse_str(id.trim())
            .map_err(|e| NearbyError::InvalidInput(format!("Invalid item id {:?}: {}", id, e)))?;
        let item = self.store.get(id).await.map_err(|e| match e {
            NearbyError::Storage(_) => e,
            other => NearbyError::Storage(other.to_string()),
        })?;
        Ok(item.map(ItemResponse::from))
    }

    fn validate(&self, criteria: &FilterCriteria) -> Result<()> {
        if let Some(proximity) = &criteria.proximity {
            validate_point(&proximity.center)?;
            validate_radius(proximity.radius_km, self.config.max_radius_km)?;
        }

        if let Some(term) = &criteria.search
            && term.chars().count() > self.config.max_search_term_len
        {
            return Err(NearbyError::InvalidInput(format!(
                "Search term longer than {} characters",
                self.config.max_search_term_len
            )));
        }

        Ok(())
    }
}
