//! Bootstrap tests against the in-memory store

use chrono::{TimeZone, Utc};
use jobmatch_domain::{Error, JobListing, SearchRequest, StoredListing};
use jobmatch_infrastructure::config::{
    AppConfig, CacheConfig, ConfigBuilder, EventBusConfig, ListingsConfig, SearchConfig,
};
use jobmatch_infrastructure::health::HealthStatus;
use jobmatch_infrastructure::init_search_context;
use tempfile::NamedTempFile;

fn listing(id: &str, skills: &[&str], day: u32) -> StoredListing {
    let created = Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap();
    StoredListing::new(JobListing {
        id: id.to_string(),
        title: format!("Role {id}"),
        description: String::new(),
        skills: skills.iter().map(ToString::to_string).collect(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        salary_min: Some(90_000),
        salary_max: None,
        created_at: created,
        updated_at: created,
    })
}

fn seed_file() -> NamedTempFile {
    let listings: Vec<StoredListing> = (1..=15)
        .map(|day| listing(&format!("job-{day:02}"), &["typescript"], day))
        .chain([listing("go-only", &["go"], 20)])
        .collect();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), serde_json::to_string(&listings).unwrap()).unwrap();
    file
}

fn config(seed: &NamedTempFile) -> AppConfig {
    ConfigBuilder::new()
        .with_listings(ListingsConfig {
            seed_path: Some(seed.path().to_path_buf()),
            ..ListingsConfig::default()
        })
        .build()
}

fn typescript() -> SearchRequest {
    SearchRequest::new(vec!["typescript".into()])
}

#[tokio::test]
async fn test_search_over_seeded_store() {
    let seed = seed_file();
    let context = init_search_context(&config(&seed)).await.unwrap();
    assert!(context.cache_enabled());

    let result = context.search(typescript().with_limit(5)).await.unwrap();
    assert_eq!(result.total, 15);
    assert_eq!(result.len(), 5);
    assert_eq!(result.job_listings[0].id, "job-15");

    context.shutdown().await;
}

#[tokio::test]
async fn test_interactive_limit_is_clamped() {
    let seed = seed_file();
    let context = init_search_context(&config(&seed)).await.unwrap();

    let result = context.search(typescript().with_limit(5_000)).await.unwrap();
    assert_eq!(result.limit, 100);
    context.shutdown().await;
}

#[tokio::test]
async fn test_invalid_request_is_rejected() {
    let seed = seed_file();
    let context = init_search_context(&config(&seed)).await.unwrap();

    let err = context
        .search(SearchRequest::new(vec![" ".into()]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    context.shutdown().await;
}

#[tokio::test]
async fn test_export_ignores_offset() {
    let seed = seed_file();
    let context = init_search_context(&config(&seed)).await.unwrap();

    let result = context
        .export(typescript().with_limit(1000).with_offset(10))
        .await
        .unwrap();
    assert_eq!(result.offset, 0);
    assert_eq!(result.len(), 15);
    context.shutdown().await;
}

#[tokio::test]
async fn test_export_can_be_disabled() {
    let seed = seed_file();
    let mut config = config(&seed);
    config.search = SearchConfig {
        export_enabled: false,
        ..SearchConfig::default()
    };
    let context = init_search_context(&config).await.unwrap();

    let err = context.export(typescript()).await.unwrap_err();
    assert!(matches!(err, Error::FeatureDisabled { .. }));
    context.shutdown().await;
}

#[tokio::test]
async fn test_health_reports_components() {
    let seed = seed_file();
    let context = init_search_context(&config(&seed)).await.unwrap();

    let health = context.health().await;
    assert_eq!(health.status, HealthStatus::Up);
    assert_eq!(health.checks["listings"].status, HealthStatus::Up);
    assert_eq!(health.checks["listings"].provider.as_deref(), Some("memory"));
    assert_eq!(health.checks["cache"].status, HealthStatus::Up);
    context.shutdown().await;
}

#[tokio::test]
async fn test_disabled_cache_reports_disabled() {
    let seed = seed_file();
    let config = AppConfig {
        cache: CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        },
        event_bus: EventBusConfig::null(),
        ..config(&seed)
    };
    let context = init_search_context(&config).await.unwrap();

    assert!(!context.cache_enabled());
    assert_eq!(context.event_bus().provider_name(), "null");
    let health = context.health().await;
    assert_eq!(health.checks["cache"].status, HealthStatus::Disabled);
    assert_eq!(health.status, HealthStatus::Up);
    context.shutdown().await;
}

#[tokio::test]
async fn test_unknown_cache_degrades() {
    let seed = seed_file();
    let config = AppConfig {
        cache: CacheConfig {
            provider: "memcached".into(),
            ..CacheConfig::default()
        },
        ..config(&seed)
    };
    let context = init_search_context(&config).await.unwrap();

    assert!(!context.cache_enabled());
    assert_eq!(context.search(typescript()).await.unwrap().total, 15);
    assert_eq!(context.health().await.status, HealthStatus::Degraded);
    context.shutdown().await;
}

#[tokio::test]
async fn test_unknown_listing_store_fails() {
    let config = ConfigBuilder::new()
        .with_listings(ListingsConfig {
            provider: "oracle".into(),
            ..ListingsConfig::default()
        })
        .build();

    let err = init_search_context(&config).await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
