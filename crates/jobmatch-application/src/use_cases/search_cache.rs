//! Search result cache policy
//!
//! The cache only ever speeds searches up. Every failure of the backing
//! provider (error, timeout, malformed or stale entry) is logged and turned
//! into a miss on read, or ignored on write.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jobmatch_domain::constants::{SEARCH_CACHE_KEY_PREFIX, SEARCH_CACHE_TTL_SECS};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::{CacheEntryConfig, CacheProvider};
use jobmatch_domain::value_objects::{CacheEntry, RankingStrategy, SearchRequest, SearchResult};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Default key namespace
pub const DEFAULT_CACHE_NAMESPACE: &str = "jobmatch";

/// Default bound on a single cache round trip
pub const DEFAULT_CACHE_OPERATION_TIMEOUT: Duration = Duration::from_millis(250);

/// Read-through/write-through cache of search results
#[derive(Debug, Clone)]
pub struct SearchCache {
    provider: Arc<dyn CacheProvider>,
    namespace: String,
    ttl: Duration,
    operation_timeout: Duration,
}

impl SearchCache {
    /// Cache over `provider` with the default namespace, TTL and timeout
    pub fn new(provider: Arc<dyn CacheProvider>) -> Self {
        Self {
            provider,
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            ttl: Duration::from_secs(SEARCH_CACHE_TTL_SECS),
            operation_timeout: DEFAULT_CACHE_OPERATION_TIMEOUT,
        }
    }

    /// Set the key namespace
    #[must_use]
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the entry lifetime
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the bound on a single provider call
    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Entry lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Backing provider name
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Key of a request under a ranking strategy.
    ///
    /// The request is serialized in struct field order, so the key does not
    /// depend on how the request value was put together, only on its field
    /// values.
    pub fn key(&self, request: &SearchRequest, strategy: RankingStrategy) -> Result<String> {
        let canonical = serde_json::to_string(request)?;
        let digest = hex::encode(Sha256::digest(canonical.as_bytes()));
        Ok(format!(
            "{}:{SEARCH_CACHE_KEY_PREFIX}:{strategy}:{digest}",
            self.namespace
        ))
    }

    /// Fresh cached result for `key`, or `None`
    pub async fn get(&self, key: &str) -> Option<SearchResult> {
        let raw = match tokio::time::timeout(self.operation_timeout, self.provider.get_json(key))
            .await
        {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => {
                debug!(key, "search cache miss");
                return None;
            }
            Ok(Err(e)) => {
                warn!(key, error = %e, "search cache read failed; treating as miss");
                return None;
            }
            Err(_) => {
                warn!(
                    key,
                    timeout_ms = self.timeout_ms(),
                    "search cache read timed out; treating as miss"
                );
                return None;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if entry.is_expired(Utc::now()) => {
                debug!(key, expired_at = %entry.expires_at, "search cache entry expired");
                None
            }
            Ok(entry) => {
                debug!(key, "search cache hit");
                Some(entry.result)
            }
            Err(e) => {
                warn!(key, error = %e, "malformed search cache entry; treating as miss");
                None
            }
        }
    }

    /// Store `result` under `key`, replacing any previous entry
    pub async fn set(&self, key: &str, result: &SearchResult) {
        let expires_at = TimeDelta::from_std(self.ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let entry = CacheEntry {
            expires_at,
            result: result.clone(),
        };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize search result for cache");
                return;
            }
        };

        let config = CacheEntryConfig::new().with_ttl(self.ttl);
        match tokio::time::timeout(
            self.operation_timeout,
            self.provider.set_json(key, &raw, config),
        )
        .await
        {
            Ok(Ok(())) => debug!(key, ttl_secs = self.ttl.as_secs(), "search result cached"),
            Ok(Err(e)) => warn!(key, error = %e, "search cache write failed; ignoring"),
            Err(_) => warn!(
                key,
                timeout_ms = self.timeout_ms(),
                "search cache write timed out; ignoring"
            ),
        }
    }

    /// Probe the backing store with a read of a key that is never written
    pub async fn probe(&self) -> Result<()> {
        let key = format!("{}:health", self.namespace);
        match tokio::time::timeout(self.operation_timeout, self.provider.exists(&key)).await {
            Ok(result) => result.map(|_| ()),
            Err(_) => Err(Error::cache("cache probe timed out")),
        }
    }

    fn timeout_ms(&self) -> u128 {
        self.operation_timeout.as_millis()
    }
}
