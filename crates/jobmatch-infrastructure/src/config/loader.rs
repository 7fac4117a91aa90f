//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//! 1. `AppConfig::default()`
//! 2. a TOML file (explicit path, or the first default location found)
//! 3. environment variables such as `JOBMATCH__CACHE__ENABLED=false`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use jobmatch_domain::error::{Error, Result};

use crate::config::{AppConfig, CacheConfig, EventBusConfig, EventBusKind, ListingsConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with the default prefix and file discovery
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load, merge and validate configuration
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    /// The explicit configuration file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.search.feature_dimensions == 0 {
        return Err(Error::configuration(
            "search.feature_dimensions must be greater than 0",
        ));
    }
    validate_cache_config(&config.cache)?;
    validate_listings_config(&config.listings)?;
    validate_event_bus_config(&config.event_bus)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_cache_config(cache: &CacheConfig) -> Result<()> {
    if !cache.enabled {
        return Ok(());
    }
    if cache.ttl_secs == 0 {
        return Err(Error::configuration(
            "Cache TTL cannot be 0 when cache is enabled",
        ));
    }
    if cache.provider == "redis" && cache.redis_url.is_none() {
        return Err(Error::configuration(
            "cache.redis_url is required for the redis cache",
        ));
    }
    Ok(())
}

fn validate_listings_config(listings: &ListingsConfig) -> Result<()> {
    if listings.provider == "postgres" && listings.url.is_none() {
        return Err(Error::configuration(
            "listings.url is required for the postgres listing store",
        ));
    }
    Ok(())
}

fn validate_event_bus_config(event_bus: &EventBusConfig) -> Result<()> {
    if event_bus.provider == EventBusKind::Nats && event_bus.nats_url.is_none() {
        return Err(Error::configuration(
            "event_bus.nats_url is required for the nats event bus",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Start from defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search section
    #[must_use]
    pub fn with_search(mut self, search: crate::config::SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set the cache section
    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set the listings section
    #[must_use]
    pub fn with_listings(mut self, listings: ListingsConfig) -> Self {
        self.config.listings = listings;
        self
    }

    /// Set the event bus section
    #[must_use]
    pub fn with_event_bus(mut self, event_bus: EventBusConfig) -> Self {
        self.config.event_bus = event_bus;
        self
    }

    /// Set the logging section
    #[must_use]
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Finish building
    pub fn build(self) -> AppConfig {
        self.config
    }
}
