//! In-process event bus over a tokio broadcast channel
//!
//! Every receiver from [`TokioEventBusProvider::subscribe`] sees each search
//! event published after it subscribed. Nothing is persisted; a receiver that
//! falls more than `capacity` events behind gets `RecvError::Lagged`.

use async_trait::async_trait;
use jobmatch_domain::error::Result;
use jobmatch_domain::events::DomainEvent;
use jobmatch_domain::ports::EventBusProvider;
use tokio::sync::broadcast;
use tracing::debug;

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;

/// Broadcast event bus
#[derive(Clone)]
pub struct TokioEventBusProvider {
    sender: broadcast::Sender<DomainEvent>,
}

impl TokioEventBusProvider {
    /// Bus with the default per-subscriber buffer
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Bus buffering up to `capacity` events per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receive events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioEventBusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBusProvider")
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EventBusProvider for TokioEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        let name = event.name();
        // A send error only means nobody is listening.
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(event = name, subscribers = delivered, "event broadcast");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "tokio"
    }
}
