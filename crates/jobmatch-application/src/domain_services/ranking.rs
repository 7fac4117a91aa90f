//! Binds the configured ranking strategy to a request

use jobmatch_domain::value_objects::{RankingPlan, RankingStrategy, SearchRequest};

use super::FeatureVectorGenerator;

/// Produces the ranking plan a listing store orders the page by
#[derive(Debug, Clone, Copy)]
pub struct RankingPlanner {
    strategy: RankingStrategy,
    vectors: FeatureVectorGenerator,
}

impl RankingPlanner {
    /// Planner for `strategy`, using `vectors` for similarity queries
    pub fn new(strategy: RankingStrategy, vectors: FeatureVectorGenerator) -> Self {
        Self { strategy, vectors }
    }

    /// Configured strategy
    pub fn strategy(&self) -> RankingStrategy {
        self.strategy
    }

    /// Plan for one request
    pub fn plan(&self, request: &SearchRequest) -> RankingPlan {
        match self.strategy {
            RankingStrategy::ExactRecency => RankingPlan::ExactRecency,
            RankingStrategy::SimilarityRank => RankingPlan::SimilarityRank {
                query: self.vectors.generate(&request.skills),
            },
        }
    }
}
