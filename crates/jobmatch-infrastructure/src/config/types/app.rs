//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{CacheConfig, EventBusConfig, ListingsConfig, LoggingConfig, SearchConfig};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Search engine behavior
    pub search: SearchConfig,
    /// Result cache
    pub cache: CacheConfig,
    /// Listing data source
    pub listings: ListingsConfig,
    /// Search notifications
    pub event_bus: EventBusConfig,
    /// Logging
    pub logging: LoggingConfig,
}
