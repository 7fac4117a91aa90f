//! Search Service Use Case
//!
//! Orchestrates one search: cache lookup, predicate construction, the
//! concurrent count and page reads, assembly, cache population and the
//! "search performed" notification. Only a data source failure reaches the
//! caller.

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::events::{DomainEvent, SearchPerformed};
use jobmatch_domain::ports::ListingStoreProvider;
use jobmatch_domain::value_objects::{RankingStrategy, SearchRequest, SearchResult};
use tracing::{debug, warn};

use crate::domain_services::{
    FeatureVectorGenerator, PredicateBuilder, RankingPlanner, ResultAssembler,
};
use crate::ports::services::SearchServiceInterface;
use crate::use_cases::{SearchCache, SearchNotifier};

/// Search service implementation
pub struct SearchServiceImpl {
    listings: Arc<dyn ListingStoreProvider>,
    planner: RankingPlanner,
    cache: Option<SearchCache>,
    notifier: Option<Arc<SearchNotifier>>,
}

impl SearchServiceImpl {
    /// Service over `listings` ordering by `strategy`, without cache or
    /// notifications
    pub fn new(listings: Arc<dyn ListingStoreProvider>, strategy: RankingStrategy) -> Self {
        Self {
            listings,
            planner: RankingPlanner::new(strategy, FeatureVectorGenerator::default()),
            cache: None,
            notifier: None,
        }
    }

    /// Use a feature vector generator other than the default
    #[must_use]
    pub fn with_feature_vectors(mut self, vectors: FeatureVectorGenerator) -> Self {
        self.planner = RankingPlanner::new(self.planner.strategy(), vectors);
        self
    }

    /// Enable result caching
    #[must_use]
    pub fn with_cache(mut self, cache: SearchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enable search notifications
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<SearchNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// The cache in use, if any
    pub fn cache(&self) -> Option<&SearchCache> {
        self.cache.as_ref()
    }

    fn cache_key(&self, request: &SearchRequest) -> Option<(&SearchCache, String)> {
        let cache = self.cache.as_ref()?;
        match cache.key(request, self.planner.strategy()) {
            Ok(key) => Some((cache, key)),
            Err(e) => {
                warn!(error = %e, "could not derive search cache key; bypassing cache");
                None
            }
        }
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResult> {
        let predicates = PredicateBuilder::build(request, self.planner.strategy());
        let ranking = self.planner.plan(request);
        let page = request.pagination();

        let (total, rows) = tokio::try_join!(
            self.listings.count(&predicates),
            self.listings.fetch_page(&predicates, &ranking, page),
        )?;

        ResultAssembler::assemble(rows, total, page)
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let cached = self.cache_key(request);

        if let Some((cache, key)) = &cached
            && let Some(hit) = cache.get(key).await
        {
            return Ok(hit);
        }

        let result = self
            .fetch(request)
            .await
            .map_err(|e| Error::search_failed("Failed to search jobs", e))?;

        debug!(
            store = self.listings.provider_name(),
            ranking = %self.planner.strategy(),
            total = result.total,
            returned = result.len(),
            "search completed"
        );

        if let Some((cache, key)) = &cached {
            cache.set(key, &result).await;
        }

        if let Some(notifier) = &self.notifier {
            notifier.notify(DomainEvent::JobSearch(SearchPerformed {
                query: request.clone(),
                result_count: result.len(),
                total: result.total,
            }));
        }

        Ok(result)
    }

    fn ranking_strategy(&self) -> RankingStrategy {
        self.planner.strategy()
    }
}
