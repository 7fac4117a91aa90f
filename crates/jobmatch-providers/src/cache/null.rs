//! Null cache provider
//!
//! Accepts writes and forgets them. Used when caching is switched off but a
//! provider is still needed, and in tests.

use async_trait::async_trait;
use jobmatch_application::ports::registry::{CACHE_PROVIDERS, CacheProviderEntry};
use jobmatch_domain::error::Result;
use jobmatch_domain::ports::{CacheEntryConfig, CacheProvider};

/// Cache provider that never holds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a null provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "No-op cache (every read misses)",
    factory: |_| Ok(std::sync::Arc::new(NullCacheProvider::new())),
};
