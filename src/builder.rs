//! Builder for the search pipeline
//!
//! Wires a storage adapter and a configuration into a [`NearbySearch`].

use crate::config::Config;
use crate::error::Result;
use crate::search::NearbySearch;
use crate::storage::{ItemStore, MemoryItemStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for [`NearbySearch`] with a pluggable store and settings.
pub struct SearchBuilder {
    store: Option<Arc<dyn ItemStore>>,
    seed_path: Option<PathBuf>,
    config: Config,
}

impl SearchBuilder {
    /// Create a new builder with default configuration and an empty
    /// in-memory store.
    pub fn new() -> Self {
        Self {
            store: None,
            seed_path: None,
            config: Config::default(),
        }
    }

    /// Use a custom storage adapter.
    pub fn store(mut self, store: Arc<dyn ItemStore>) -> Self {
        self.store = Some(store);
        self.seed_path = None;
        self
    }

    /// Use an in-memory store loaded from a JSON array of items.
    pub fn seed_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.seed_path = Some(path.into());
        self.store = None;
        self
    }

    /// Set the search configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the radius used when a center arrives without one.
    pub fn default_radius_km(mut self, radius_km: f64) -> Self {
        self.config = self.config.with_default_radius_km(radius_km);
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> Result<NearbySearch> {
        let store: Arc<dyn ItemStore> = match (self.store, self.seed_path) {
            (Some(store), _) => store,
            (None, Some(path)) => Arc::new(MemoryItemStore::from_json_file(path)?),
            (None, None) => Arc::new(MemoryItemStore::new()),
        };
        NearbySearch::new(store, self.config)
    }
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
