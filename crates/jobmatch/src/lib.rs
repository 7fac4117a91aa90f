//! # Jobmatch
//!
//! Skill-based search over job listings: filter by skill overlap, location
//! and salary band, rank by recency or by feature vector similarity, and page
//! through results with an exact total. Results are cached for a fixed TTL
//! and every answered search is announced on an event bus.
//!
//! ## Example
//!
//! ```ignore
//! use jobmatch::infrastructure::{ConfigLoader, init_search_context};
//! use jobmatch::domain::SearchRequest;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_search_context(&config).await?;
//! let result = context
//!     .search(SearchRequest::new(vec!["typescript".into(), "azure".into()]))
//!     .await?;
//! println!("{} of {}", result.len(), result.total);
//! context.shutdown().await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, ports and errors
//! - `application` - search orchestration, cache policy, notifications
//! - `infrastructure` - configuration, logging, health, bootstrap
//! - `providers` - listing stores, caches and event buses

/// Domain layer - core types
pub mod domain {
    pub use jobmatch_domain::*;
}

/// Application layer - search use case
pub mod application {
    pub use jobmatch_application::*;
}

/// Infrastructure layer - config, logging, bootstrap
pub mod infrastructure {
    pub use jobmatch_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use jobmatch_providers::*;
}

/// Command line interface
pub mod cli;

pub use domain::*;
pub use infrastructure::{SearchContext, init_search_context};
