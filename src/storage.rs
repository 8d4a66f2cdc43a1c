//! Persistence contract for listings
//!
//! The search pipeline never talks to a database directly. It hands a
//! [`PredicateSet`] to an [`ItemStore`] and gets back candidate rows in one
//! round trip. Adapters translate the typed predicates into whatever their
//! backend understands.

use crate::error::Result;
use crate::query::predicate::PredicateSet;
use nearby_types::Item;
use uuid::Uuid;

mod memory;

pub use memory::MemoryItemStore;

/// Trait for listing storage implementations
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Return every row matching all predicates. Order is unspecified and
    /// there is no pagination.
    async fn execute(&self, predicates: &PredicateSet) -> Result<Vec<Item>>;

    /// Fetch a single row by identity.
    async fn get(&self, id: Uuid) -> Result<Option<Item>>;
}
