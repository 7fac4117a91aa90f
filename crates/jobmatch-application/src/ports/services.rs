//! Application Service Port Interfaces

use async_trait::async_trait;
use jobmatch_domain::error::Result;
use jobmatch_domain::value_objects::{RankingStrategy, SearchRequest, SearchResult};

/// Search Service Interface
///
/// The entry point transport layers call. Requests must already have passed
/// [`SearchRequest::validate`]; the only error returned is
/// [`jobmatch_domain::Error::SearchFailed`].
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Run a search
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult>;

    /// Ranking strategy the service orders results by
    fn ranking_strategy(&self) -> RankingStrategy;
}
