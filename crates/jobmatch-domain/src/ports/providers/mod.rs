//! Provider ports

/// Cache provider port
pub mod cache;
/// Listing store provider port
pub mod listing_store;

pub use cache::{CacheEntryConfig, CacheProvider};
pub use listing_store::ListingStoreProvider;
