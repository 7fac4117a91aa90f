//! Event bus configuration types

use jobmatch_providers::constants::{EVENT_BUS_DEFAULT_CAPACITY, NATS_DEFAULT_SUBJECT};
use serde::{Deserialize, Serialize};

/// Event bus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusKind {
    /// In-process broadcast channel
    #[default]
    Tokio,
    /// NATS subject shared across processes
    Nats,
    /// Discard every event
    Null,
}

/// Event bus configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventBusConfig {
    /// Provider to use
    pub provider: EventBusKind,

    /// Buffer capacity of the in-process bus
    pub capacity: usize,

    /// NATS server URL, e.g. `nats://localhost:4222`
    pub nats_url: Option<String>,

    /// NATS subject events are published on
    pub subject: String,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusKind::Tokio,
            capacity: EVENT_BUS_DEFAULT_CAPACITY,
            nats_url: None,
            subject: NATS_DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl EventBusConfig {
    /// Config for the null bus
    pub fn null() -> Self {
        Self {
            provider: EventBusKind::Null,
            ..Default::default()
        }
    }

    /// Config for a NATS bus at `url`
    pub fn nats(url: impl Into<String>) -> Self {
        Self {
            provider: EventBusKind::Nats,
            nats_url: Some(url.into()),
            ..Default::default()
        }
    }
}
