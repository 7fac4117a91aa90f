//! Search context bootstrap
//!
//! Composition root: resolves the configured providers, wires them into the
//! search service and keeps the handles needed for health checks and
//! shutdown.
//!
//! ```text
//! AppConfig -> registries (linkme) -> providers -> SearchServiceImpl
//!                                         |
//!                                   SearchNotifier -> EventBusProvider
//! ```
//!
//! Optional components degrade instead of failing startup: an unresolvable
//! cache means no cache, an unreachable NATS server means the null bus. Only
//! the listing store is required.

use std::sync::Arc;
use std::time::{Duration, Instant};

use jobmatch_application::ports::registry::{
    CacheProviderConfig, ListingStoreProviderConfig, resolve_cache_provider,
    resolve_listing_store_provider,
};
use jobmatch_application::{
    FeatureVectorGenerator, SearchCache, SearchNotifier, SearchServiceImpl,
    SearchServiceInterface,
};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::{EventBusProvider, ListingStoreProvider};
use jobmatch_domain::value_objects::{SearchMode, SearchRequest, SearchResult};
use jobmatch_providers::events::{NullEventBusProvider, TokioEventBusProvider};
use tracing::{info, warn};

use crate::config::{AppConfig, CacheConfig, EventBusConfig, EventBusKind, ListingsConfig};
use crate::constants::{HEALTH_CHECK_CACHE, HEALTH_CHECK_LISTINGS};
use crate::error_ext::registry_error;
use crate::health::{HealthCheck, HealthResponse};

/// Feature name reported when export searches are switched off
pub const EXPORT_FEATURE: &str = "export";

/// A wired search engine plus the handles around it
pub struct SearchContext {
    config: Arc<AppConfig>,
    listings: Arc<dyn ListingStoreProvider>,
    cache: Option<SearchCache>,
    cache_error: Option<String>,
    event_bus: Arc<dyn EventBusProvider>,
    notifier: Arc<SearchNotifier>,
    service: Arc<SearchServiceImpl>,
}

/// Build a [`SearchContext`] from configuration
///
/// Must run inside a tokio runtime: the notification worker is spawned here.
pub async fn init_search_context(config: &AppConfig) -> Result<SearchContext> {
    let listings = build_listing_store(&config.listings)?;
    let (cache, cache_error) = build_cache(&config.cache);
    let event_bus = build_event_bus(&config.event_bus).await;
    let notifier = Arc::new(SearchNotifier::spawn(
        event_bus.clone(),
        config.search.notification_queue_capacity,
    ));

    let mut service = SearchServiceImpl::new(listings.clone(), config.search.ranking)
        .with_feature_vectors(FeatureVectorGenerator::new(config.search.feature_dimensions))
        .with_notifier(notifier.clone());
    if let Some(cache) = &cache {
        service = service.with_cache(cache.clone());
    }

    info!(
        listings = listings.provider_name(),
        cache = cache.as_ref().map_or("disabled", SearchCache::provider_name),
        event_bus = event_bus.provider_name(),
        ranking = %config.search.ranking,
        "search context initialized"
    );

    Ok(SearchContext {
        config: Arc::new(config.clone()),
        listings,
        cache,
        cache_error,
        event_bus,
        notifier,
        service: Arc::new(service),
    })
}

fn build_listing_store(config: &ListingsConfig) -> Result<Arc<dyn ListingStoreProvider>> {
    let mut registry_config = ListingStoreProviderConfig::new(&config.provider)
        .with_max_connections(config.max_connections)
        .with_table(&config.table);
    registry_config.url.clone_from(&config.url);
    registry_config.min_idle = config.min_idle;
    registry_config.connection_timeout = Some(Duration::from_secs(config.connection_timeout_secs));
    registry_config.seed_path.clone_from(&config.seed_path);

    resolve_listing_store_provider(&registry_config).map_err(|e| registry_error("listing store", e))
}

fn build_cache(config: &CacheConfig) -> (Option<SearchCache>, Option<String>) {
    if !config.enabled {
        info!("search result cache disabled");
        return (None, None);
    }

    let mut registry_config = CacheProviderConfig::new(&config.provider);
    registry_config.uri.clone_from(&config.redis_url);
    registry_config.max_entries = config.max_entries;

    match resolve_cache_provider(&registry_config) {
        Ok(provider) => {
            let cache = SearchCache::new(provider)
                .with_namespace(&config.namespace)
                .with_ttl(config.ttl())
                .with_operation_timeout(config.operation_timeout());
            (Some(cache), None)
        }
        Err(e) => {
            warn!(provider = %config.provider, error = %e, "cache unavailable; searching without cache");
            (None, Some(e))
        }
    }
}

async fn build_event_bus(config: &EventBusConfig) -> Arc<dyn EventBusProvider> {
    match config.provider {
        EventBusKind::Tokio => Arc::new(TokioEventBusProvider::with_capacity(config.capacity)),
        EventBusKind::Null => Arc::new(NullEventBusProvider::new()),
        EventBusKind::Nats => connect_nats(config).await,
    }
}

#[cfg(feature = "events-nats")]
async fn connect_nats(config: &EventBusConfig) -> Arc<dyn EventBusProvider> {
    use jobmatch_providers::events::NatsEventBusProvider;

    use crate::constants::DEFAULT_NATS_CLIENT_NAME;

    let Some(url) = config.nats_url.as_deref() else {
        warn!("nats event bus selected without nats_url; notifications disabled");
        return Arc::new(NullEventBusProvider::new());
    };
    match NatsEventBusProvider::with_options(url, &config.subject, Some(DEFAULT_NATS_CLIENT_NAME))
        .await
    {
        Ok(bus) => Arc::new(bus),
        Err(e) => {
            warn!(url, error = %e, "NATS unavailable; notifications disabled");
            Arc::new(NullEventBusProvider::new())
        }
    }
}

#[cfg(not(feature = "events-nats"))]
async fn connect_nats(_config: &EventBusConfig) -> Arc<dyn EventBusProvider> {
    warn!("built without NATS support; notifications disabled");
    Arc::new(NullEventBusProvider::new())
}

impl SearchContext {
    /// Configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The search service
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        self.service.clone()
    }

    /// The listing store
    pub fn listings(&self) -> Arc<dyn ListingStoreProvider> {
        self.listings.clone()
    }

    /// The event bus notifications are published to
    pub fn event_bus(&self) -> Arc<dyn EventBusProvider> {
        self.event_bus.clone()
    }

    /// Whether results are cached
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Validate and run an interactive search
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResult> {
        let request = request.validate(SearchMode::Interactive)?;
        self.service.search(&request).await
    }

    /// Validate and run an export search
    pub async fn export(&self, request: SearchRequest) -> Result<SearchResult> {
        if !self.config.search.export_enabled {
            return Err(Error::feature_disabled(EXPORT_FEATURE));
        }
        let request = request.validate(SearchMode::Export)?;
        self.service.search(&request).await
    }

    /// Check the listing store and the cache
    pub async fn health(&self) -> HealthResponse {
        let started = Instant::now();

        let listings_started = Instant::now();
        let listings = match self.listings.health_check().await {
            Ok(()) => HealthCheck::healthy(HEALTH_CHECK_LISTINGS),
            Err(e) => HealthCheck::failed(HEALTH_CHECK_LISTINGS, Some(e.to_string())),
        }
        .with_provider(self.listings.provider_name())
        .with_response_time(listings_started.elapsed());

        let cache = match (&self.cache, &self.cache_error) {
            (Some(cache), _) => {
                let cache_started = Instant::now();
                match cache.probe().await {
                    Ok(()) => HealthCheck::healthy(HEALTH_CHECK_CACHE),
                    Err(e) => HealthCheck::degraded(HEALTH_CHECK_CACHE, Some(e.to_string())),
                }
                .with_provider(cache.provider_name())
                .with_response_time(cache_started.elapsed())
            }
            (None, Some(error)) => HealthCheck::degraded(HEALTH_CHECK_CACHE, Some(error.clone()))
                .with_provider(&self.config.cache.provider),
            (None, None) => HealthCheck::disabled(HEALTH_CHECK_CACHE),
        };

        HealthResponse::new()
            .add_check(listings)
            .add_check(cache)
            .with_response_time(started.elapsed())
    }

    /// Drain pending notifications and stop the worker
    pub async fn shutdown(&self) {
        self.notifier.shutdown().await;
        info!("search context shut down");
    }
}

impl std::fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext")
            .field("listings", &self.listings.provider_name())
            .field("cache", &self.cache)
            .field("event_bus", &self.event_bus.provider_name())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}
