//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ListingStoreProvider`] | Data source answering count and page queries |
//! | [`CacheProvider`] | String key/value store with TTL |
//! | [`EventBusProvider`] | Channel receiving search notifications |

/// Infrastructure ports (event channels)
pub mod infrastructure;
/// Provider ports (listing stores, caches)
pub mod providers;

pub use infrastructure::EventBusProvider;
pub use providers::{CacheEntryConfig, CacheProvider, ListingStoreProvider};
