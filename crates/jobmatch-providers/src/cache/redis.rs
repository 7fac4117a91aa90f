//! Redis distributed cache provider
//!
//! Shared cache for multi-instance deployments. One multiplexed connection is
//! opened lazily and reused by all callers; after a failed command it is
//! dropped so the next call reconnects.
//!
//! ```ignore
//! use jobmatch_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jobmatch_application::ports::registry::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry,
};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::ports::{CacheEntryConfig, CacheProvider};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;

use crate::constants::REDIS_DEFAULT_URL;

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    connection: Arc<Mutex<Option<MultiplexedConnection>>>,
}

impl RedisCacheProvider {
    /// Create a provider for a connection URL (e.g. "redis://localhost:6379").
    ///
    /// Only the URL is checked here; the server is contacted on first use.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::infrastructure_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(Mutex::new(None)),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        let mut guard = self.connection.lock().await;
        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                Error::infrastructure_with_source(format!("Failed to get Redis connection: {e}"), e)
            })?;
        *guard = Some(conn.clone());
        Ok(conn)
    }

    async fn reset_connection(&self) {
        *self.connection.lock().await = None;
    }

    async fn command_failed(&self, command: &str, e: redis::RedisError) -> Error {
        self.reset_connection().await;
        Error::infrastructure_with_source(format!("Redis {command} failed: {e}"), e)
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: redis::RedisResult<Option<String>> = conn.get(key).await;
        match value {
            Ok(value) => Ok(value),
            Err(e) => Err(self.command_failed("GET", e).await),
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;
        let ttl_seconds = config.ttl.as_secs().max(1);

        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl_seconds).await;
        match result {
            Ok(()) => Ok(()),
            Err(e) => Err(self.command_failed("SETEX", e).await),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let exists: redis::RedisResult<i64> = conn.exists(key).await;
        match exists {
            Ok(count) => Ok(count > 0),
            Err(e) => Err(self.command_failed("EXISTS", e).await),
        }
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider").finish_non_exhaustive()
    }
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: |config: &CacheProviderConfig| {
        let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);
        RedisCacheProvider::new(uri)
            .map(|p| Arc::new(p) as Arc<dyn CacheProvider>)
            .map_err(|e| e.to_string())
    },
};
