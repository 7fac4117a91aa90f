//! In-memory listing store tests

use std::io::Write;

use chrono::{Duration, TimeZone, Utc};
use jobmatch_application::ports::registry::{
    ListingStoreProviderConfig, resolve_listing_store_provider,
};
use jobmatch_domain::ports::ListingStoreProvider;
use jobmatch_domain::{
    FeatureVector, JobListing, Pagination, PredicateClause, PredicateSet, RankingPlan,
    StoredListing,
};
use jobmatch_providers::listing_store::InMemoryListingStore;

fn listing(id: &str, skills: &[&str], location: &str, age_days: i64) -> StoredListing {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let created = base - Duration::days(age_days);
    StoredListing::new(JobListing {
        id: id.to_string(),
        title: format!("Role {id}"),
        description: String::new(),
        skills: skills.iter().map(ToString::to_string).collect(),
        company: "Acme".to_string(),
        location: location.to_string(),
        salary_min: None,
        salary_max: None,
        created_at: created,
        updated_at: created,
    })
}

fn store() -> InMemoryListingStore {
    InMemoryListingStore::from_listings([
        listing("a", &["typescript", "azure"], "Seattle, WA", 3),
        listing("b", &["typescript"], "Remote", 1),
        listing("c", &["go"], "Seattle, WA", 0),
        listing("d", &["azure"], "Austin, TX", 2),
    ])
}

fn skills(values: &[&str]) -> PredicateSet {
    [PredicateClause::SkillsOverlap(
        values.iter().map(ToString::to_string).collect(),
    )]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn test_count_applies_predicates() {
    let store = store();
    assert_eq!(store.count(&skills(&["typescript", "azure"])).await.unwrap(), 3);
    assert_eq!(store.count(&PredicateSet::new()).await.unwrap(), 4);

    let mut located = skills(&["typescript", "azure"]);
    located.push(PredicateClause::LocationContains("seattle".into()));
    assert_eq!(store.count(&located).await.unwrap(), 1);
}

#[tokio::test]
async fn test_page_is_newest_first() {
    let store = store();
    let rows = store
        .fetch_page(
            &skills(&["typescript", "azure"]),
            &RankingPlan::ExactRecency,
            Pagination { limit: 10, offset: 0 },
        )
        .await
        .unwrap();

    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["b", "d", "a"]);
    assert!(rows.iter().all(|r| r.similarity.is_none()));
}

#[tokio::test]
async fn test_page_window() {
    let store = store();
    let predicates = skills(&["typescript", "azure"]);

    let rows = store
        .fetch_page(&predicates, &RankingPlan::ExactRecency, Pagination { limit: 1, offset: 1 })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "d");

    let past_end = store
        .fetch_page(&predicates, &RankingPlan::ExactRecency, Pagination { limit: 5, offset: 10 })
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_similarity_ranking_uses_stored_vectors() {
    let store = InMemoryListingStore::from_listings([
        listing("far", &["rust"], "Remote", 0).with_embedding(FeatureVector::new(vec![0.0, 1.0])),
        listing("near", &["rust"], "Remote", 5).with_embedding(FeatureVector::new(vec![1.0, 0.1])),
        listing("none", &["rust"], "Remote", 1),
    ]);
    let mut predicates = skills(&["rust"]);
    predicates.push(PredicateClause::HasFeatureVector);
    let plan = RankingPlan::SimilarityRank {
        query: FeatureVector::new(vec![1.0, 0.0]),
    };

    assert_eq!(store.count(&predicates).await.unwrap(), 2);

    let rows = store
        .fetch_page(&predicates, &plan, Pagination { limit: 10, offset: 0 })
        .await
        .unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["near", "far"]);
    assert!(rows[0].similarity.unwrap() > rows[1].similarity.unwrap());
}

#[tokio::test]
async fn test_insert_replaces_by_id() {
    let store = InMemoryListingStore::new();
    assert!(store.is_empty());

    store.insert(listing("x", &["go"], "Remote", 0));
    store.insert(listing("x", &["rust"], "Remote", 0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.count(&skills(&["rust"])).await.unwrap(), 1);

    assert!(store.remove("x").is_some());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_registry_loads_seed_file() {
    let seeds = vec![listing("seeded", &["typescript"], "Remote", 0)];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&seeds).unwrap().as_bytes())
        .unwrap();

    let config = ListingStoreProviderConfig::new("memory").with_seed_path(file.path());
    let provider = resolve_listing_store_provider(&config).unwrap();

    assert_eq!(provider.provider_name(), "memory");
    assert_eq!(provider.count(&skills(&["typescript"])).await.unwrap(), 1);
}

#[test]
fn test_registry_reports_bad_seed_file() {
    let config = ListingStoreProviderConfig::new("memory").with_seed_path("/nonexistent/seed.json");
    let Err(err) = resolve_listing_store_provider(&config) else {
        panic!("missing seed file should fail");
    };
    assert!(err.contains("seed"));
}
