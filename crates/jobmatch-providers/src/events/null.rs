//! Null event bus provider

use async_trait::async_trait;
use jobmatch_domain::error::Result;
use jobmatch_domain::events::DomainEvent;
use jobmatch_domain::ports::EventBusProvider;
use tracing::trace;

/// Event bus that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventBusProvider;

impl NullEventBusProvider {
    /// Create a null bus
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventBusProvider for NullEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        trace!(event = event.name(), "discarding event");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
