//! Listing Store Provider Port
//!
//! The data source behind a search. Every search issues exactly two reads, a
//! count and a page, both filtered by the same [`PredicateSet`].

use async_trait::async_trait;

use crate::entities::ListingRow;
use crate::error::Result;
use crate::value_objects::{Pagination, PredicateSet, RankingPlan};

/// Listing Store Provider Port
#[async_trait]
pub trait ListingStoreProvider: Send + Sync {
    /// Number of listings matching `predicates`
    async fn count(&self, predicates: &PredicateSet) -> Result<u64>;

    /// Listings matching `predicates`, ordered by `ranking`, windowed by `page`
    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        ranking: &RankingPlan,
        page: Pagination,
    ) -> Result<Vec<ListingRow>>;

    /// Check that the store can answer queries
    async fn health_check(&self) -> Result<()>;

    /// Provider name for logs and health output
    fn provider_name(&self) -> &str;
}
