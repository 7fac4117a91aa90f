//! Domain layer constants

/// Page size used when the caller does not provide a limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Upper bound on `limit` for interactive searches
pub const MAX_INTERACTIVE_LIMIT: u32 = 100;

/// Upper bound on `limit` for export searches
pub const MAX_EXPORT_LIMIT: u32 = 1000;

/// Dimension of stored listing feature vectors
pub const FEATURE_VECTOR_DIMENSIONS: usize = 1536;

/// Modulus applied when folding a skill hash into a vector slot
pub const FEATURE_HASH_MODULUS: f64 = 1000.0;

/// Lifetime of a cached search result in seconds
pub const SEARCH_CACHE_TTL_SECS: u64 = 300;

/// Prefix segment of every search cache key
pub const SEARCH_CACHE_KEY_PREFIX: &str = "search";

/// Name of the event emitted after a search completes
pub const JOB_SEARCH_EVENT_NAME: &str = "job.search";
