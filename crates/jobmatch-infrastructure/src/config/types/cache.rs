//! Cache configuration types

use std::time::Duration;

use jobmatch_application::use_cases::search_cache::DEFAULT_CACHE_NAMESPACE;
use jobmatch_domain::constants::SEARCH_CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_OPERATION_TIMEOUT_MS, DEFAULT_CACHE_PROVIDER};

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled
    pub enabled: bool,

    /// Registered cache provider name (`moka`, `redis`, `null`)
    pub provider: String,

    /// Entry lifetime in seconds
    pub ttl_secs: u64,

    /// Entry bound of in-process caches
    pub max_entries: Option<u64>,

    /// Redis URL (for the redis provider)
    pub redis_url: Option<String>,

    /// Namespace prefixed to every key
    pub namespace: String,

    /// Bound on a single cache round trip in milliseconds
    pub operation_timeout_ms: u64,
}

impl CacheConfig {
    /// Entry lifetime
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Bound on a single cache round trip
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            ttl_secs: SEARCH_CACHE_TTL_SECS,
            max_entries: None,
            redis_url: None,
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            operation_timeout_ms: DEFAULT_CACHE_OPERATION_TIMEOUT_MS,
        }
    }
}
