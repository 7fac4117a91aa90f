//! Infrastructure Layer - Jobmatch
//!
//! Cross-cutting concerns around the search engine.
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`config`] | Figment-based configuration (defaults, TOML file, `JOBMATCH__*` env) |
//! | [`logging`] | tracing subscriber setup |
//! | [`health`] | Health check types |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`bootstrap`] | Builds a ready [`SearchContext`](bootstrap::SearchContext) from an [`AppConfig`](config::AppConfig) |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use bootstrap::{SearchContext, init_search_context};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use health::{HealthCheck, HealthResponse, HealthStatus};
