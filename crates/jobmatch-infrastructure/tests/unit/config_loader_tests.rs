//! Configuration loader tests

use std::io::Write;

use jobmatch_domain::{Error, RankingStrategy};
use jobmatch_infrastructure::config::{
    CacheConfig, ConfigBuilder, ConfigLoader, EventBusConfig, EventBusKind, ListingsConfig,
};
use jobmatch_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

fn missing_file_loader(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("JOBMATCH_TEST_UNSET")
}

#[test]
fn test_defaults_when_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let config = missing_file_loader(&dir).load().unwrap();

    assert_eq!(config.search.ranking, RankingStrategy::ExactRecency);
    assert_eq!(config.search.feature_dimensions, 1536);
    assert!(config.search.export_enabled);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.provider, "moka");
    assert_eq!(config.cache.ttl_secs, 300);
    assert_eq!(config.listings.provider, "memory");
    assert_eq!(config.listings.table, "job_listings");
    assert_eq!(config.event_bus.provider, EventBusKind::Tokio);
    assert_eq!(config.event_bus.subject, "job-events");
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_partial_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jobmatch.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[search]
ranking = "similarity_rank"
export_enabled = false

[cache]
enabled = false

[listings]
seed_path = "listings.json"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("JOBMATCH_TEST_UNSET")
        .load()
        .unwrap();

    assert_eq!(config.search.ranking, RankingStrategy::SimilarityRank);
    assert!(!config.search.export_enabled);
    assert_eq!(config.search.feature_dimensions, 1536);
    assert!(!config.cache.enabled);
    assert_eq!(config.listings.seed_path.as_deref(), Some(std::path::Path::new("listings.json")));
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jobmatch.toml");
    std::fs::write(&path, "[cache]\nttl_secs = 60\n").unwrap();

    // Unique prefix keeps this test independent of other tests and the host.
    // SAFETY: no other test reads or writes this variable.
    unsafe { std::env::set_var("JOBMATCH_TEST_ENV__CACHE__TTL_SECS", "120") };
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("JOBMATCH_TEST_ENV")
        .load();
    unsafe { std::env::remove_var("JOBMATCH_TEST_ENV__CACHE__TTL_SECS") };

    assert_eq!(config.unwrap().cache.ttl_secs, 120);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_event_bus(EventBusConfig::null())
        .with_cache(CacheConfig {
            namespace: "saved".into(),
            ..CacheConfig::default()
        })
        .build();
    ConfigLoader::new().save_to_file(&original, &path).unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("JOBMATCH_TEST_UNSET")
        .load()
        .unwrap();
    assert_eq!(loaded, original);
}

fn rejects(contents: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, contents).unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("JOBMATCH_TEST_UNSET")
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "{contents}: {err}");
}

#[test]
fn test_validation_failures() {
    rejects("[search]\nfeature_dimensions = 0\n");
    rejects("[cache]\nttl_secs = 0\n");
    rejects("[cache]\nprovider = \"redis\"\n");
    rejects("[listings]\nprovider = \"postgres\"\n");
    rejects("[event_bus]\nprovider = \"nats\"\n");
    rejects("[logging]\nlevel = \"loud\"\n");
    rejects("[search]\nranking = \"random\"\n");
}

#[test]
fn test_disabled_cache_skips_cache_checks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jobmatch.toml");
    std::fs::write(&path, "[cache]\nenabled = false\nttl_secs = 0\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("JOBMATCH_TEST_UNSET")
        .load()
        .unwrap();
    assert!(!config.cache.enabled);
}

#[test]
fn test_builder_sections() {
    let config = ConfigBuilder::new()
        .with_listings(ListingsConfig {
            provider: "postgres".into(),
            url: Some("postgres://localhost/jobs".into()),
            ..ListingsConfig::default()
        })
        .with_event_bus(EventBusConfig::nats("nats://localhost:4222"))
        .build();

    assert_eq!(config.listings.provider, "postgres");
    assert_eq!(config.event_bus.provider, EventBusKind::Nats);
    assert_eq!(config.event_bus.nats_url.as_deref(), Some("nats://localhost:4222"));
}
