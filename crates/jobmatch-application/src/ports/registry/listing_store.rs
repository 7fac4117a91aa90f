//! Listing Store Provider Registry

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use jobmatch_domain::ports::ListingStoreProvider;

/// Configuration for listing store creation
#[derive(Debug, Clone, Default)]
pub struct ListingStoreProviderConfig {
    /// Provider name (e.g., "postgres", "memory")
    pub provider: String,
    /// Connection URL (for database stores)
    pub url: Option<String>,
    /// Maximum pooled connections
    pub max_connections: Option<u32>,
    /// Idle connections kept open
    pub min_idle: Option<u32>,
    /// Time to wait for a pooled connection
    pub connection_timeout: Option<Duration>,
    /// Table holding the listings
    pub table: Option<String>,
    /// JSON file of listings loaded at startup (in-memory store)
    pub seed_path: Option<PathBuf>,
}

impl ListingStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the connection URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the pool size
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Set the table name
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the seed file
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }
}

/// Registry entry for listing stores
pub struct ListingStoreProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ListingStoreProviderConfig) -> Result<Arc<dyn ListingStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static LISTING_STORE_PROVIDERS: [ListingStoreProviderEntry] = [..];

/// Resolve listing store by name from registry
pub fn resolve_listing_store_provider(
    config: &ListingStoreProviderConfig,
) -> Result<Arc<dyn ListingStoreProvider>, String> {
    if let Some(entry) = LISTING_STORE_PROVIDERS
        .iter()
        .find(|e| e.name == config.provider)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = LISTING_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown listing store provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered listing stores as (name, description)
pub fn list_listing_store_providers() -> Vec<(&'static str, &'static str)> {
    LISTING_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
