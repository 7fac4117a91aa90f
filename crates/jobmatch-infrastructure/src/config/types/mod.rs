//! Configuration types module

pub mod app;
pub mod cache;
pub mod event_bus;
pub mod listings;
pub mod logging;
pub mod search;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use event_bus::{EventBusConfig, EventBusKind};
pub use listings::ListingsConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
