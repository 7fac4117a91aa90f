//! Pure search building blocks
//!
//! Nothing here performs I/O; each service is a deterministic function of its
//! inputs.

/// Skill list to feature vector mapping
pub mod feature_vector;
/// Search request to predicate set translation
pub mod predicate_builder;
/// Ranking strategy to ranking plan binding
pub mod ranking;
/// Raw row to listing assembly
pub mod result_assembler;

pub use feature_vector::FeatureVectorGenerator;
pub use predicate_builder::PredicateBuilder;
pub use ranking::RankingPlanner;
pub use result_assembler::ResultAssembler;
