//! Search request to predicate set translation

use jobmatch_domain::value_objects::{
    PredicateClause, PredicateSet, RankingStrategy, SearchRequest,
};

/// Builds the single predicate set a search uses for both count and page.
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Clauses, in order: skills, feature vector presence (similarity ranking
    /// only), location, salary floor, salary ceiling.
    ///
    /// The request must already be validated; an empty skill list here is a
    /// caller bug and produces a set that matches nothing.
    pub fn build(request: &SearchRequest, strategy: RankingStrategy) -> PredicateSet {
        let mut predicates = PredicateSet::new();
        predicates.push(PredicateClause::SkillsOverlap(request.skills.clone()));

        if strategy == RankingStrategy::SimilarityRank {
            predicates.push(PredicateClause::HasFeatureVector);
        }
        if let Some(location) = request.location.as_deref().filter(|l| !l.is_empty()) {
            predicates.push(PredicateClause::LocationContains(location.to_string()));
        }
        if let Some(floor) = request.salary_min {
            predicates.push(PredicateClause::SalaryFloor(floor));
        }
        if let Some(ceiling) = request.salary_max {
            predicates.push(PredicateClause::SalaryCeiling(ceiling));
        }
        predicates
    }
}
