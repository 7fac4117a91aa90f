//! Provider Registry System
//!
//! Providers register themselves at link time into `linkme` distributed
//! slices declared here; configuration then selects one by name.
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(CACHE_PROVIDERS)]
//!                       static ENTRY: CacheProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..]
//! 3. Resolver queries:  CACHE_PROVIDERS.iter()
//! 4. Config selects:    provider = "redis" → RedisCacheProvider
//! ```
//!
//! ### Registering a Provider (in jobmatch-providers)
//!
//! ```ignore
//! use jobmatch_application::ports::registry::{CacheProviderEntry, CACHE_PROVIDERS};
//!
//! #[linkme::distributed_slice(CACHE_PROVIDERS)]
//! static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
//!     name: "moka",
//!     description: "In-process cache",
//!     factory: |config| Ok(Arc::new(MokaCacheProvider::from_config(config))),
//! };
//! ```

pub mod cache;
pub mod listing_store;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
pub use listing_store::{
    LISTING_STORE_PROVIDERS, ListingStoreProviderConfig, ListingStoreProviderEntry,
    list_listing_store_providers, resolve_listing_store_provider,
};
