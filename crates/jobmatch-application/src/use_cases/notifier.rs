//! Fire-and-forget search notifications
//!
//! Searches hand events to a bounded queue and move on. A background worker
//! drains the queue into the event bus. When the queue is full the event is
//! dropped, so a slow or unreachable channel never adds latency to a search.

use std::sync::{Arc, Mutex};

use jobmatch_domain::events::DomainEvent;
use jobmatch_domain::ports::EventBusProvider;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default queue capacity
pub const DEFAULT_NOTIFICATION_QUEUE_CAPACITY: usize = 1024;

/// Queue in front of an [`EventBusProvider`]
pub struct SearchNotifier {
    sender: mpsc::Sender<DomainEvent>,
    shutdown: CancellationToken,
    worker: Mutex<Option<JoinHandle<()>>>,
    bus_name: String,
}

impl SearchNotifier {
    /// Start the worker on the current tokio runtime
    pub fn spawn(event_bus: Arc<dyn EventBusProvider>, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let shutdown = CancellationToken::new();
        let bus_name = event_bus.provider_name().to_string();
        let worker = tokio::spawn(run_worker(event_bus, receiver, shutdown.clone()));

        Self {
            sender,
            shutdown,
            worker: Mutex::new(Some(worker)),
            bus_name,
        }
    }

    /// Name of the event bus behind the queue
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    /// Enqueue an event without waiting. Returns whether it was accepted.
    pub fn notify(&self, event: DomainEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(event = event.name(), "notification queue full; dropping event");
                false
            }
            Err(TrySendError::Closed(event)) => {
                warn!(event = event.name(), "notification worker stopped; dropping event");
                false
            }
        }
    }

    /// Publish everything already queued, then stop the worker
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        let worker = self
            .worker
            .lock()
            .ok()
            .and_then(|mut guard| guard.take());
        if let Some(worker) = worker
            && let Err(e) = worker.await
        {
            warn!(error = %e, "notification worker terminated abnormally");
        }
    }
}

impl std::fmt::Debug for SearchNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchNotifier")
            .field("bus", &self.bus_name)
            .field("capacity", &self.sender.max_capacity())
            .finish_non_exhaustive()
    }
}

async fn run_worker(
    event_bus: Arc<dyn EventBusProvider>,
    mut receiver: mpsc::Receiver<DomainEvent>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            next = receiver.recv() => match next {
                Some(event) => publish(event_bus.as_ref(), event).await,
                None => break,
            },
            () = shutdown.cancelled() => {
                while let Ok(event) = receiver.try_recv() {
                    publish(event_bus.as_ref(), event).await;
                }
                break;
            }
        }
    }
    debug!("notification worker stopped");
}

async fn publish(event_bus: &dyn EventBusProvider, event: DomainEvent) {
    let name = event.name();
    if let Err(e) = event_bus.publish_event(event).await {
        warn!(event = name, error = %e, "failed to publish notification");
    }
}
