//! Search cache policy tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use jobmatch_application::SearchCache;
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::{CacheEntryConfig, CacheProvider};
use jobmatch_domain::{CacheEntry, JobListing, RankingStrategy, SearchRequest, SearchResult};
use jobmatch_providers::cache::MokaCacheProvider;

/// Cache backend that fails every call
#[derive(Debug)]
struct FailingCache;

#[async_trait]
impl CacheProvider for FailingCache {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::cache("backend unavailable"))
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Err(Error::cache("backend unavailable"))
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Err(Error::cache("backend unavailable"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Cache backend that never answers in time
#[derive(Debug)]
struct StalledCache;

#[async_trait]
impl CacheProvider for StalledCache {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "stalled"
    }
}

fn result() -> SearchResult {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    SearchResult {
        job_listings: vec![JobListing {
            id: "job-1".into(),
            title: "Engineer".into(),
            description: String::new(),
            skills: vec!["typescript".into()],
            company: "Acme".into(),
            location: "Remote".into(),
            salary_min: None,
            salary_max: None,
            created_at: created,
            updated_at: created,
        }],
        total: 1,
        limit: 10,
        offset: 0,
    }
}

fn request() -> SearchRequest {
    SearchRequest::new(vec!["typescript".into(), "azure".into()])
}

#[test]
fn test_key_is_stable_and_namespaced() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new())).with_namespace("test");

    let a = cache.key(&request(), RankingStrategy::ExactRecency).unwrap();
    let b = cache
        .key(
            &SearchRequest::new(vec!["typescript".into(), "azure".into()])
                .with_offset(0)
                .with_limit(10),
            RankingStrategy::ExactRecency,
        )
        .unwrap();

    assert_eq!(a, b);
    assert!(a.starts_with("test:search:exact_recency:"));
    assert_eq!(a.rsplit(':').next().unwrap().len(), 64);
}

#[test]
fn test_key_differs_by_field_and_strategy() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));
    let base = cache.key(&request(), RankingStrategy::ExactRecency).unwrap();

    assert_ne!(base, cache.key(&request().with_offset(10), RankingStrategy::ExactRecency).unwrap());
    assert_ne!(
        base,
        cache.key(&request().with_location("Remote"), RankingStrategy::ExactRecency).unwrap()
    );
    assert_ne!(base, cache.key(&request(), RankingStrategy::SimilarityRank).unwrap());
}

#[tokio::test]
async fn test_set_then_get() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));
    let key = cache.key(&request(), RankingStrategy::ExactRecency).unwrap();

    assert!(cache.get(&key).await.is_none());
    cache.set(&key, &result()).await;
    assert_eq!(cache.get(&key).await, Some(result()));
}

#[tokio::test]
async fn test_expired_entry_is_a_miss() {
    let provider = Arc::new(MokaCacheProvider::new());
    let cache = SearchCache::new(provider.clone());
    let stale = CacheEntry {
        expires_at: Utc::now() - chrono::Duration::seconds(1),
        result: result(),
    };
    provider
        .set_json("k", &serde_json::to_string(&stale).unwrap(), CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(cache.get("k").await.is_none());
}

#[tokio::test]
async fn test_malformed_entry_is_a_miss() {
    let provider = Arc::new(MokaCacheProvider::new());
    let cache = SearchCache::new(provider.clone());
    provider
        .set_json("k", "{not json", CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(cache.get("k").await.is_none());
}

#[tokio::test]
async fn test_provider_failure_is_a_miss() {
    let cache = SearchCache::new(Arc::new(FailingCache));
    cache.set("k", &result()).await;
    assert!(cache.get("k").await.is_none());
    assert!(cache.probe().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stalled_provider_times_out() {
    let cache = SearchCache::new(Arc::new(StalledCache))
        .with_operation_timeout(Duration::from_millis(100));

    cache.set("k", &result()).await;
    assert!(cache.get("k").await.is_none());
    assert!(matches!(cache.probe().await, Err(Error::Cache { .. })));
}

#[tokio::test]
async fn test_entries_expire_after_ttl() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()))
        .with_ttl(Duration::from_millis(200));
    assert_eq!(cache.ttl(), Duration::from_millis(200));

    cache.set("k", &result()).await;
    assert!(cache.get("k").await.is_some());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(cache.get("k").await.is_none());
}

#[tokio::test]
async fn test_probe_healthy_backend() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));
    assert!(cache.probe().await.is_ok());
    assert_eq!(cache.provider_name(), "moka");
}
