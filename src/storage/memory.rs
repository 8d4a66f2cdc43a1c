//! In-memory listing store.

use super::ItemStore;
use crate::error::{NearbyError, Result};
use crate::query::predicate::PredicateSet;
use nearby_types::Item;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::path::Path;
use uuid::Uuid;

#[derive(Default)]
struct Table {
    rows: Vec<Item>,
    index: FxHashMap<Uuid, usize>,
}

/// Listing table held in memory, in insertion order.
///
/// Evaluates predicates with [`PredicateSet::matches`], so it doubles as the
/// reference adapter for the predicate semantics.
#[derive(Default)]
pub struct MemoryItemStore {
    table: RwLock<Table>,
}

impl MemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given rows.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let store = Self::new();
        store.extend(items);
        store
    }

    /// Load a store from a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::with_items(items))
    }

    /// Load a store from a file containing a JSON array of items.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        log::info!("Loaded {} items from {}", store.len(), path.display());
        Ok(store)
    }

    /// Insert a row, replacing any row with the same id in place.
    pub fn insert(&self, item: Item) {
        let mut table = self.table.write();
        if let Some(&slot) = table.index.get(&item.id) {
            table.rows[slot] = item;
        } else {
            let slot = table.rows.len();
            table.index.insert(item.id, slot);
            table.rows.push(item);
        }
    }

    pub fn extend(&self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            self.insert(item);
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }

    fn select(&self, predicates: &PredicateSet) -> Vec<Item> {
        self.table
            .read()
            .rows
            .iter()
            .filter(|item| predicates.matches(item))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl ItemStore for MemoryItemStore {
    async fn execute(&self, predicates: &PredicateSet) -> Result<Vec<Item>> {
        Ok(self.select(predicates))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>> {
        let table = self.table.read();
        match table.index.get(&id) {
            Some(&slot) => table
                .rows
                .get(slot)
                .cloned()
                .map(Some)
                .ok_or_else(|| NearbyError::Storage(format!("index points past row {}", slot))),
            None => Ok(None),
        }
    }
}
