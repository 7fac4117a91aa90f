//! Listing data source configuration types

use std::path::PathBuf;

use jobmatch_providers::constants::{
    LISTINGS_DEFAULT_TABLE, POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS,
    POSTGRES_DEFAULT_MAX_CONNECTIONS,
};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LISTING_STORE_PROVIDER;

/// Listing data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingsConfig {
    /// Registered listing store name (`memory`, `postgres`)
    pub provider: String,

    /// Database URL (for the postgres store)
    pub url: Option<String>,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Idle connections kept open
    pub min_idle: Option<u32>,

    /// Seconds to wait for a pooled connection
    pub connection_timeout_secs: u64,

    /// Table holding the listings
    pub table: String,

    /// JSON seed file (for the memory store)
    pub seed_path: Option<PathBuf>,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_LISTING_STORE_PROVIDER.to_string(),
            url: None,
            max_connections: POSTGRES_DEFAULT_MAX_CONNECTIONS,
            min_idle: None,
            connection_timeout_secs: POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS,
            table: LISTINGS_DEFAULT_TABLE.to_string(),
            seed_path: None,
        }
    }
}
