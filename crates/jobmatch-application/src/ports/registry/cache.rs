//! Cache provider registry
//!
//! TTLs are not part of provider construction: the search cache passes one
//! with every write.

use std::sync::Arc;

use jobmatch_domain::ports::CacheProvider;

/// Settings handed to a cache factory
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Registered name to resolve ("moka", "redis", "null")
    pub provider: String,
    /// Server URI of a distributed cache
    pub uri: Option<String>,
    /// Entry bound of an in-process cache
    pub max_entries: Option<u64>,
}

impl CacheProviderConfig {
    /// Settings selecting `provider`
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Point a distributed cache at `uri`
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Bound an in-process cache
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = Some(max_entries);
        self
    }
}

/// Factory signature of a cache provider
pub type CacheProviderFactory = fn(&CacheProviderConfig) -> Result<Arc<dyn CacheProvider>, String>;

/// A cache provider registered at link time
pub struct CacheProviderEntry {
    /// Name matched against [`CacheProviderConfig::provider`]
    pub name: &'static str,
    /// One-line description for `jobmatch providers`
    pub description: &'static str,
    /// Builds the provider
    pub factory: CacheProviderFactory,
}

#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Build the cache provider named in `config`
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn CacheProvider>, String> {
    let Some(entry) = CACHE_PROVIDERS.iter().find(|e| e.name == config.provider) else {
        let known: Vec<&str> = CACHE_PROVIDERS.iter().map(|e| e.name).collect();
        return Err(format!(
            "Unknown cache provider '{}'. Available providers: {known:?}",
            config.provider
        ));
    };
    (entry.factory)(config)
}

/// `(name, description)` of every registered cache provider
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
