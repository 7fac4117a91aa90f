//! Event Bus Provider Port
//!
//! Channel receiving "search performed" notifications. Delivery is
//! best-effort: the engine never waits on, or fails because of, a publish.
//!
//! ```no_run
//! use jobmatch_domain::events::{DomainEvent, SearchPerformed};
//! use jobmatch_domain::ports::EventBusProvider;
//! use jobmatch_domain::value_objects::SearchRequest;
//! use std::sync::Arc;
//!
//! async fn announce(bus: Arc<dyn EventBusProvider>) -> jobmatch_domain::Result<()> {
//!     let event = DomainEvent::JobSearch(SearchPerformed {
//!         query: SearchRequest::new(vec!["rust".into()]),
//!         result_count: 3,
//!         total: 3,
//!     });
//!     bus.publish_event(event).await
//! }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::events::DomainEvent;

/// Event bus provider interface
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a domain event
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
