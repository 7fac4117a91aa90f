//! Use cases

/// Fire-and-forget search notifications
pub mod notifier;
/// Search result cache policy
pub mod search_cache;
/// Search orchestration
pub mod search_service;

pub use notifier::SearchNotifier;
pub use search_cache::SearchCache;
pub use search_service::SearchServiceImpl;
