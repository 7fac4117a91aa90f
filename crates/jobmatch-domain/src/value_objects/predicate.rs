//! Filter predicates shared by count and page queries
//!
//! A [`PredicateSet`] is built once per search and handed, unchanged, to both
//! the count query and the page query of a listing store. Stores either
//! evaluate it in process through [`PredicateSet::matches`] or render it to
//! their own query language clause by clause.

use serde::{Deserialize, Serialize};

use crate::entities::StoredListing;

/// A bound parameter value of a predicate clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredicateValue {
    /// List of strings
    TextList(Vec<String>),
    /// Single string
    Text(String),
    /// Integer
    Integer(i64),
}

/// One named filter clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredicateClause {
    /// Listing skills intersect the requested skills
    SkillsOverlap(Vec<String>),
    /// Listing location contains the value, ignoring case
    LocationContains(String),
    /// Listing upper salary bound is unstated or at least the value
    SalaryFloor(i64),
    /// Listing lower salary bound is unstated or at most the value
    SalaryCeiling(i64),
    /// Listing has a stored feature vector
    HasFeatureVector,
}

impl PredicateClause {
    /// Stable clause name
    pub fn name(&self) -> &'static str {
        match self {
            Self::SkillsOverlap(_) => "skills",
            Self::LocationContains(_) => "location",
            Self::SalaryFloor(_) => "salary_min",
            Self::SalaryCeiling(_) => "salary_max",
            Self::HasFeatureVector => "has_feature_vector",
        }
    }

    /// Bound parameter of the clause, if it takes one
    pub fn value(&self) -> Option<PredicateValue> {
        match self {
            Self::SkillsOverlap(skills) => Some(PredicateValue::TextList(skills.clone())),
            Self::LocationContains(location) => Some(PredicateValue::Text(location.clone())),
            Self::SalaryFloor(v) | Self::SalaryCeiling(v) => Some(PredicateValue::Integer(*v)),
            Self::HasFeatureVector => None,
        }
    }

    /// Evaluate the clause against a stored listing
    pub fn matches(&self, stored: &StoredListing) -> bool {
        let listing = &stored.listing;
        match self {
            Self::SkillsOverlap(skills) => listing.skills.iter().any(|s| skills.contains(s)),
            Self::LocationContains(needle) => listing
                .location
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::SalaryFloor(floor) => listing.salary_max.is_none_or(|max| max >= *floor),
            Self::SalaryCeiling(ceiling) => listing.salary_min.is_none_or(|min| min <= *ceiling),
            Self::HasFeatureVector => stored.skills_embedding.is_some(),
        }
    }
}

/// Ordered conjunction of predicate clauses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    clauses: Vec<PredicateClause>,
}

impl PredicateSet {
    /// Create an empty predicate set (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause
    pub fn push(&mut self, clause: PredicateClause) {
        self.clauses.push(clause);
    }

    /// Clauses in the order they were added
    pub fn clauses(&self) -> &[PredicateClause] {
        &self.clauses
    }

    /// Clause names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.clauses.iter().map(PredicateClause::name).collect()
    }

    /// Bound parameter values in clause order
    pub fn values(&self) -> Vec<PredicateValue> {
        self.clauses.iter().filter_map(PredicateClause::value).collect()
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the set has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether every clause accepts the listing
    pub fn matches(&self, stored: &StoredListing) -> bool {
        self.clauses.iter().all(|c| c.matches(stored))
    }
}

impl FromIterator<PredicateClause> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = PredicateClause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}
