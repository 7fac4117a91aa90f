//! Domain events

/// Search lifecycle events
pub mod domain_events;

pub use domain_events::{DomainEvent, EventEnvelope, SearchPerformed};
