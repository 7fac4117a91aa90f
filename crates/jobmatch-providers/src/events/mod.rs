//! Event Bus Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullEventBusProvider`] | Disabled | Discards all events |
//! | [`TokioEventBusProvider`] | In-process | Tokio broadcast channel |
//! | `NatsEventBusProvider` | Distributed | JSON envelopes on a NATS subject |

#[cfg(feature = "events-nats")]
pub mod nats;
pub mod null;
pub mod tokio;

#[cfg(feature = "events-nats")]
pub use nats::NatsEventBusProvider;
pub use null::NullEventBusProvider;
pub use tokio::TokioEventBusProvider;

pub use jobmatch_domain::events::DomainEvent;
pub use jobmatch_domain::ports::EventBusProvider;
