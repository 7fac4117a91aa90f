//! Ranking order tests

use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use jobmatch_domain::{FeatureVector, JobListing, RankingPlan, RankingStrategy, StoredListing};

fn stored(id: &str, day: u32, embedding: Option<Vec<f32>>) -> StoredListing {
    let created = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
    StoredListing {
        listing: JobListing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            description: String::new(),
            skills: vec!["rust".to_string()],
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary_min: None,
            salary_max: None,
            created_at: created,
            updated_at: created,
        },
        skills_embedding: embedding.map(FeatureVector::new),
    }
}

fn sort_ids(plan: &RankingPlan, rows: &[StoredListing]) -> Vec<String> {
    let mut keyed: Vec<_> = rows.iter().map(|r| plan.key(r)).collect();
    keyed.sort_by(|a, b| plan.compare(a, b));
    keyed.iter().map(|k| k.id.to_string()).collect()
}

#[test]
fn test_recency_newest_first_ties_by_id() {
    let rows = vec![
        stored("b", 1, None),
        stored("c", 5, None),
        stored("a", 1, None),
    ];
    let ids = sort_ids(&RankingPlan::ExactRecency, &rows);
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_similarity_highest_first_ties_by_id() {
    let plan = RankingPlan::SimilarityRank {
        query: FeatureVector::new(vec![1.0, 0.0]),
    };
    let rows = vec![
        stored("z", 1, Some(vec![0.0, 1.0])),
        stored("y", 2, Some(vec![1.0, 0.0])),
        stored("x", 3, Some(vec![2.0, 0.0])),
    ];
    let ids = sort_ids(&plan, &rows);
    assert_eq!(ids, vec!["x", "y", "z"]);
}

#[test]
fn test_ordering_is_total() {
    let plan = RankingPlan::ExactRecency;
    let a = stored("a", 1, None);
    let b = stored("b", 1, None);

    assert_eq!(plan.compare(&plan.key(&a), &plan.key(&b)), Ordering::Less);
    assert_eq!(plan.compare(&plan.key(&b), &plan.key(&a)), Ordering::Greater);
    assert_eq!(plan.compare(&plan.key(&a), &plan.key(&a)), Ordering::Equal);
}

#[test]
fn test_score_requires_embedding() {
    let plan = RankingPlan::SimilarityRank {
        query: FeatureVector::new(vec![1.0]),
    };
    assert!(plan.score(&stored("a", 1, None)).is_none());
    assert!(plan.score(&stored("a", 1, Some(vec![1.0]))).is_some());
    assert!(RankingPlan::ExactRecency.score(&stored("a", 1, Some(vec![1.0]))).is_none());
}

#[test]
fn test_strategy_names() {
    assert_eq!(RankingStrategy::default(), RankingStrategy::ExactRecency);
    assert_eq!(RankingStrategy::SimilarityRank.to_string(), "similarity_rank");
    let parsed: RankingStrategy = serde_json::from_str("\"similarity_rank\"").unwrap();
    assert_eq!(parsed, RankingStrategy::SimilarityRank);
    assert_eq!(
        RankingPlan::SimilarityRank {
            query: FeatureVector::new(vec![])
        }
        .strategy(),
        RankingStrategy::SimilarityRank
    );
}
