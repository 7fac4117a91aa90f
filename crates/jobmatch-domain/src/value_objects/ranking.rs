//! Ranking strategies
//!
//! Both orderings are total: ties on the primary key fall back to ascending
//! listing id, so pagination is repeatable while the data is unchanged.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::StoredListing;
use crate::value_objects::FeatureVector;

/// Configured ordering rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Newest first
    #[default]
    ExactRecency,
    /// Closest feature vector first
    SimilarityRank,
}

impl RankingStrategy {
    /// Stable name used in config and cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactRecency => "exact_recency",
            Self::SimilarityRank => "similarity_rank",
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranking strategy bound to a concrete request
#[derive(Debug, Clone, PartialEq)]
pub enum RankingPlan {
    /// Order by `created_at` descending
    ExactRecency,
    /// Order by cosine similarity to `query` descending
    SimilarityRank {
        /// Feature vector of the requested skills
        query: FeatureVector,
    },
}

/// Sort key of a candidate row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankKey<'a> {
    /// Listing id, the final tie breaker
    pub id: &'a str,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Similarity score, present in similarity plans
    pub score: Option<f64>,
}

impl RankingPlan {
    /// Strategy this plan was built from
    pub fn strategy(&self) -> RankingStrategy {
        match self {
            Self::ExactRecency => RankingStrategy::ExactRecency,
            Self::SimilarityRank { .. } => RankingStrategy::SimilarityRank,
        }
    }

    /// Query vector of a similarity plan
    pub fn query_vector(&self) -> Option<&FeatureVector> {
        match self {
            Self::ExactRecency => None,
            Self::SimilarityRank { query } => Some(query),
        }
    }

    /// Similarity score of a stored listing under this plan
    pub fn score(&self, stored: &StoredListing) -> Option<f64> {
        let query = self.query_vector()?;
        let embedding = stored.skills_embedding.as_ref()?;
        Some(query.cosine_similarity(embedding))
    }

    /// Sort key of a stored listing under this plan
    pub fn key<'a>(&self, stored: &'a StoredListing) -> RankKey<'a> {
        RankKey {
            id: &stored.listing.id,
            created_at: stored.listing.created_at,
            score: self.score(stored),
        }
    }

    /// Compare two candidates; `Less` means `a` ranks first
    pub fn compare(&self, a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
        let primary = match self {
            Self::ExactRecency => b.created_at.cmp(&a.created_at),
            Self::SimilarityRank { .. } => {
                let sa = a.score.unwrap_or(f64::NEG_INFINITY);
                let sb = b.score.unwrap_or(f64::NEG_INFINITY);
                sb.total_cmp(&sa)
            }
        };
        primary.then_with(|| a.id.cmp(b.id))
    }
}
