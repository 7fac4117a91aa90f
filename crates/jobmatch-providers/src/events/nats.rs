//! NATS Event Bus Provider
//!
//! Publishes each event as a JSON [`EventEnvelope`](jobmatch_domain::events::EventEnvelope) on one subject, so
//! consumers outside this process see `{ eventName, data, timestamp }`.

use async_nats::Client;
use async_trait::async_trait;
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::events::DomainEvent;
use jobmatch_domain::ports::EventBusProvider;
use tracing::{debug, info};

use crate::constants::NATS_DEFAULT_SUBJECT;

/// Event bus provider using NATS
pub struct NatsEventBusProvider {
    client: Client,
    subject: String,
}

impl NatsEventBusProvider {
    /// Connect to `url` and publish on the default subject
    pub async fn new(url: &str) -> Result<Self> {
        Self::with_options(url, NATS_DEFAULT_SUBJECT, None).await
    }

    /// Connect with a custom subject and an optional client name
    pub async fn with_options(url: &str, subject: &str, client_name: Option<&str>) -> Result<Self> {
        info!(url, subject, "connecting to NATS server");

        let mut options = async_nats::ConnectOptions::new();
        if let Some(name) = client_name {
            options = options.name(name);
        }

        let client = options.connect(url).await.map_err(|e| {
            Error::infrastructure_with_source(format!("Failed to connect to NATS at {url}: {e}"), e)
        })?;

        info!(url, "connected to NATS server");

        Ok(Self {
            client,
            subject: subject.to_string(),
        })
    }

    /// Subject events are published on
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl std::fmt::Debug for NatsEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsEventBusProvider")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EventBusProvider for NatsEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        let payload = serde_json::to_vec(&event.to_envelope()?)?;

        self.client
            .publish(self.subject.clone(), payload.into())
            .await
            .map_err(|e| Error::event_bus(format!("Failed to publish event to NATS: {e}")))?;

        debug!(subject = %self.subject, event = event.name(), "published event to NATS");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "nats"
    }
}
