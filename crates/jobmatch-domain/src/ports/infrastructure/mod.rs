//! Infrastructure ports

/// Event bus port
pub mod events;

pub use events::EventBusProvider;
