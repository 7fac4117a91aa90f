//! In-memory listing store
//!
//! Holds listings in a concurrent map and evaluates predicate sets and
//! ranking plans in process. Suitable for tests, demos and small fixed
//! catalogues loaded from a JSON seed file.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use jobmatch_application::ports::registry::{
    LISTING_STORE_PROVIDERS, ListingStoreProviderConfig, ListingStoreProviderEntry,
};
use jobmatch_domain::entities::{ListingRow, StoredListing};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::ListingStoreProvider;
use jobmatch_domain::value_objects::{Pagination, PredicateSet, RankingPlan};
use tracing::info;

/// In-memory listing store
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingStore {
    listings: Arc<DashMap<String, StoredListing>>,
}

impl InMemoryListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `listings`
    pub fn from_listings<I: IntoIterator<Item = StoredListing>>(listings: I) -> Self {
        let store = Self::new();
        for listing in listings {
            store.insert(listing);
        }
        store
    }

    /// Load listings from a JSON array of stored listings
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let listings: Vec<StoredListing> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), listings = listings.len(), "loaded listing seed file");
        Ok(Self::from_listings(listings))
    }

    /// Insert or replace a listing
    pub fn insert(&self, listing: StoredListing) {
        self.listings.insert(listing.listing.id.clone(), listing);
    }

    /// Remove a listing by id
    pub fn remove(&self, id: &str) -> Option<StoredListing> {
        self.listings.remove(id).map(|(_, listing)| listing)
    }

    /// Number of listings held
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn matching(&self, predicates: &PredicateSet) -> Vec<StoredListing> {
        self.listings
            .iter()
            .filter(|entry| predicates.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl ListingStoreProvider for InMemoryListingStore {
    async fn count(&self, predicates: &PredicateSet) -> Result<u64> {
        let total = self
            .listings
            .iter()
            .filter(|entry| predicates.matches(entry.value()))
            .count();
        Ok(total as u64)
    }

    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        ranking: &RankingPlan,
        page: Pagination,
    ) -> Result<Vec<ListingRow>> {
        let candidates = self.matching(predicates);
        let mut keyed: Vec<_> = candidates
            .iter()
            .map(|stored| (ranking.key(stored), stored))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| ranking.compare(a, b));

        Ok(keyed
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .map(|(key, stored)| ListingRow {
                similarity: key.score,
                ..ListingRow::from(&stored.listing)
            })
            .collect())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

#[linkme::distributed_slice(LISTING_STORE_PROVIDERS)]
static MEMORY_PROVIDER: ListingStoreProviderEntry = ListingStoreProviderEntry {
    name: "memory",
    description: "In-process listing store, optionally seeded from a JSON file",
    factory: |config: &ListingStoreProviderConfig| {
        let store = match &config.seed_path {
            Some(path) => InMemoryListingStore::from_json_file(path).map_err(|e: Error| {
                format!("Failed to load listing seed file {}: {e}", path.display())
            })?,
            None => InMemoryListingStore::new(),
        };
        Ok(Arc::new(store))
    },
};
