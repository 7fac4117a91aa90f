//! # Jobmatch - Provider Implementations
//!
//! Concrete implementations of the ports defined in `jobmatch-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Listing store | `ListingStoreProvider` | InMemory, Postgres |
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Events | `EventBusProvider` | Tokio, Nats, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! jobmatch-providers = { version = "0.1", default-features = false, features = ["cache-redis", "listing-postgres"] }
//! ```
//!
//! Listing stores and caches register themselves into the registries of
//! `jobmatch-application`; linking this crate is enough to make them
//! resolvable by name.

pub use jobmatch_domain::error::{Error, Result};
pub use jobmatch_domain::ports::{CacheProvider, EventBusProvider, ListingStoreProvider};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Event bus implementations
pub mod events;

/// Listing store implementations
pub mod listing_store;
