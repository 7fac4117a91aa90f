//! Cache Provider Port
//!
//! Port for cache backend providers: in-memory (Moka), distributed (Redis),
//! and a null provider used when caching is switched off.

use std::time::Duration;

use async_trait::async_trait;

use crate::constants::SEARCH_CACHE_TTL_SECS;
use crate::error::Result;

/// Write options of one cache entry
///
/// ```
/// use jobmatch_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::new().with_ttl(Duration::from_secs(60));
/// assert_eq!(config.ttl, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntryConfig {
    /// How long the backend keeps the entry
    pub ttl: Duration,
}

impl CacheEntryConfig {
    /// Options with the search result TTL
    pub fn new() -> Self {
        Self {
            ttl: Duration::from_secs(SEARCH_CACHE_TTL_SECS),
        }
    }

    /// Override the TTL
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// JSON-string storage with TTL. Implementations report backend failures as
/// `Err`; deciding whether a failure matters is left to the caller.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as a JSON string
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON string, replacing any previous value for `key`
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Whether a key is present
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Provider name for logs and health output
    fn provider_name(&self) -> &str;
}
