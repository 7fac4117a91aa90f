//! Application ports
//!
//! Service interfaces exposed to callers and the provider registries that
//! concrete providers register into.

/// Provider registries
pub mod registry;
/// Service interfaces
pub mod services;

pub use services::SearchServiceInterface;
