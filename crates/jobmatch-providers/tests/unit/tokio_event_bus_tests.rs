//! Tokio broadcast event bus tests

use std::time::Duration;

use jobmatch_domain::events::{DomainEvent, SearchPerformed};
use jobmatch_domain::ports::EventBusProvider;
use jobmatch_domain::SearchRequest;
use jobmatch_providers::events::TokioEventBusProvider;

fn event(total: u64) -> DomainEvent {
    DomainEvent::JobSearch(SearchPerformed {
        query: SearchRequest::new(vec!["typescript".into()]),
        result_count: 1,
        total,
    })
}

#[tokio::test]
async fn test_publish_without_subscribers_succeeds() {
    let bus = TokioEventBusProvider::new();
    assert_eq!(bus.subscriber_count(), 0);
    bus.publish_event(event(1)).await.unwrap();
}

#[tokio::test]
async fn test_subscriber_receives_events_in_order() {
    let bus = TokioEventBusProvider::with_capacity(8);
    let mut receiver = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 1);

    bus.publish_event(event(1)).await.unwrap();
    bus.publish_event(event(2)).await.unwrap();

    let first = tokio::time::timeout(Duration::from_secs(1), receiver.recv())
        .await
        .unwrap()
        .unwrap();
    let second = tokio::time::timeout(Duration::from_secs(1), receiver.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, event(1));
    assert_eq!(second, event(2));
}

#[tokio::test]
async fn test_dropping_receiver_removes_subscriber() {
    let bus = TokioEventBusProvider::new();
    let receiver = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 1);

    drop(receiver);
    assert_eq!(bus.subscriber_count(), 0);
}

#[tokio::test]
async fn test_lagging_receiver_skips_ahead() {
    let bus = TokioEventBusProvider::with_capacity(2);
    let mut receiver = bus.subscribe();
    for total in 1..=4 {
        bus.publish_event(event(total)).await.unwrap();
    }

    assert!(matches!(
        receiver.recv().await,
        Err(tokio::sync::broadcast::error::RecvError::Lagged(2))
    ));
    assert_eq!(receiver.recv().await.unwrap(), event(3));
}
