//! # Jobmatch Domain Layer
//!
//! Core types of the job listing search engine. Nothing in this crate performs
//! I/O: data sources, caches and event channels are described as port traits
//! in [`ports`] and implemented by the providers crate.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Job listings as stored and as returned to callers |
//! | [`value_objects`] | Search requests, results, predicates, ranking, feature vectors |
//! | [`events`] | Notifications emitted after a search completes |
//! | [`ports`] | Provider traits (listing store, cache, event bus) |
//! | [`error`] | Error type shared by every layer |
//! | [`constants`] | Limits and defaults of the search engine |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use events::{DomainEvent, EventEnvelope, SearchPerformed};
pub use value_objects::*;
