//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SearchRequest`] | Validated search parameters |
//! | [`SearchResult`] | Ranked page plus the filtered total |
//! | [`CacheEntry`] | Cached result with its expiry instant |
//! | [`PredicateSet`] | Filter clauses shared by count and page queries |
//! | [`RankingStrategy`] | Configured ordering rule |
//! | [`FeatureVector`] | Skill-derived vector used by similarity ranking |

/// Feature vector value object
pub mod feature_vector;
/// Filter predicates
pub mod predicate;
/// Ranking strategies and plans
pub mod ranking;
/// Search request and result value objects
pub mod search;

pub use feature_vector::FeatureVector;
pub use predicate::{PredicateClause, PredicateSet, PredicateValue};
pub use ranking::{RankKey, RankingPlan, RankingStrategy};
pub use search::{CacheEntry, Pagination, SearchMode, SearchRequest, SearchResult};
