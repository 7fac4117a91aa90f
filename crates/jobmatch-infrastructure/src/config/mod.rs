//! Configuration
//!
//! Typed configuration sections and the figment-based [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
