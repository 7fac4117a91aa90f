//! Provider Constants

/// Entry bound of the in-process cache
pub const MOKA_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Redis URL used when none is configured
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Broadcast channel capacity of the in-process event bus
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;

/// NATS subject receiving search events
pub const NATS_DEFAULT_SUBJECT: &str = "job-events";

/// Table holding listings
pub const LISTINGS_DEFAULT_TABLE: &str = "job_listings";

/// Pool size of the PostgreSQL store
pub const POSTGRES_DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled PostgreSQL connection
pub const POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 5;
