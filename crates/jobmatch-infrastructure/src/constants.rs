//! Infrastructure layer constants
//!
//! Domain-level constants live in `jobmatch_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "jobmatch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "jobmatch";

/// Environment variable prefix for configuration (`JOBMATCH__CACHE__ENABLED`)
pub const CONFIG_ENV_PREFIX: &str = "JOBMATCH";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "JOBMATCH_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "jobmatch";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Default cache provider name
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Default listing store provider name
pub const DEFAULT_LISTING_STORE_PROVIDER: &str = "memory";

/// Default cache operation timeout in milliseconds
pub const DEFAULT_CACHE_OPERATION_TIMEOUT_MS: u64 = 250;

/// Default NATS client name
pub const DEFAULT_NATS_CLIENT_NAME: &str = "jobmatch";

// ============================================================================
// HEALTH CHECK NAMES
// ============================================================================

/// Listing store health check
pub const HEALTH_CHECK_LISTINGS: &str = "listings";

/// Cache health check
pub const HEALTH_CHECK_CACHE: &str = "cache";
