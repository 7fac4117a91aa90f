//! Search notifier tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use jobmatch_application::SearchNotifier;
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::events::{DomainEvent, SearchPerformed};
use jobmatch_domain::ports::EventBusProvider;
use jobmatch_domain::SearchRequest;
use jobmatch_providers::events::TokioEventBusProvider;

fn event(total: u64) -> DomainEvent {
    DomainEvent::JobSearch(SearchPerformed {
        query: SearchRequest::new(vec!["rust".into()]),
        result_count: 0,
        total,
    })
}

/// Bus that blocks every publish until released
struct GatedBus {
    gate: tokio::sync::Semaphore,
    published: AtomicUsize,
}

#[async_trait]
impl EventBusProvider for GatedBus {
    async fn publish_event(&self, _event: DomainEvent) -> Result<()> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| Error::event_bus("gate closed"))?;
        self.published.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "gated"
    }
}

/// Bus that rejects every publish
struct BrokenBus;

#[async_trait]
impl EventBusProvider for BrokenBus {
    async fn publish_event(&self, _event: DomainEvent) -> Result<()> {
        Err(Error::event_bus("channel down"))
    }

    fn provider_name(&self) -> &str {
        "broken"
    }
}

#[tokio::test]
async fn test_events_reach_the_bus() {
    let bus = Arc::new(TokioEventBusProvider::new());
    let mut events = bus.subscribe();
    let notifier = SearchNotifier::spawn(bus.clone(), 8);
    assert_eq!(notifier.bus_name(), "tokio");

    assert!(notifier.notify(event(3)));

    let received = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(received, event(3));
    notifier.shutdown().await;
}

#[tokio::test]
async fn test_full_queue_drops_without_blocking() {
    let bus = Arc::new(GatedBus {
        gate: tokio::sync::Semaphore::new(0),
        published: AtomicUsize::new(0),
    });
    let notifier = SearchNotifier::spawn(bus.clone(), 1);

    // The worker takes the first event and blocks on the gate; the second
    // fills the queue and the rest are dropped.
    assert!(notifier.notify(event(1)));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(notifier.notify(event(2)));
    assert!(!notifier.notify(event(3)));
    assert!(!notifier.notify(event(4)));

    bus.gate.add_permits(10);
    notifier.shutdown().await;
    assert_eq!(bus.published.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_publish_failures_are_swallowed() {
    let notifier = SearchNotifier::spawn(Arc::new(BrokenBus), 4);
    assert!(notifier.notify(event(1)));
    notifier.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_drains_and_closes() {
    let bus = Arc::new(GatedBus {
        gate: tokio::sync::Semaphore::new(100),
        published: AtomicUsize::new(0),
    });
    let notifier = SearchNotifier::spawn(bus.clone(), 16);
    for total in 0..5 {
        assert!(notifier.notify(event(total)));
    }

    notifier.shutdown().await;
    assert_eq!(bus.published.load(Ordering::SeqCst), 5);
    assert!(!notifier.notify(event(99)));
}
