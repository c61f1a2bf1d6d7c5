//! Event queue worker.
//!
//! Collects events from the sink channel for a fixed window after the
//! first one, then processes the batch: one full ledger re-read per batch
//! that touched the ledger, published as a `vibes:updated` snapshot.

use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use vibecheck_core::{events::DomainEvent, live::LiveView};

use super::planner::{collect_setting_changes, plan_ledger_refresh};
use crate::events::{EventBus, ServerEvent, VIBES_REFRESH_ERROR, VIBES_UPDATED};

/// Debounce window for collecting events before processing.
pub const DEBOUNCE_DURATION: Duration = Duration::from_millis(250);

/// Runs until the sink side of the channel is dropped.
pub async fn event_queue_worker(
    mut rx: mpsc::UnboundedReceiver<DomainEvent>,
    mut live_view: LiveView,
    event_bus: EventBus,
) {
    tracing::info!("Domain event queue worker started");

    if let Err(e) = live_view.load() {
        tracing::warn!("Initial live view load failed, will retry on next change: {}", e);
    }

    while let Some(first) = rx.recv().await {
        let mut pending_events = vec![first];

        // Window starts at the first event; later events do not extend it.
        let deadline = tokio::time::sleep(DEBOUNCE_DURATION);
        tokio::pin!(deadline);

        let closed = loop {
            tokio::select! {
                event = rx.recv() => match event {
                    Some(e) => pending_events.push(e),
                    None => break true,
                },
                _ = &mut deadline => break false,
            }
        };

        process_event_batch(&pending_events, &mut live_view, &event_bus);
        if closed {
            break;
        }
    }

    tracing::info!("Domain event queue worker shutting down");
}

fn process_event_batch(events: &[DomainEvent], live_view: &mut LiveView, event_bus: &EventBus) {
    tracing::debug!("Processing batch of {} domain event(s)", events.len());

    for (key, value) in collect_setting_changes(events) {
        tracing::info!("Setting {} changed to {}", key, value);
    }

    if !plan_ledger_refresh(events) {
        return;
    }

    match live_view.handle_change() {
        Ok(snapshot) => match serde_json::to_value(&snapshot) {
            Ok(payload) => event_bus.publish(ServerEvent::with_payload(VIBES_UPDATED, payload)),
            Err(e) => tracing::error!("Failed to serialize vibe snapshot: {}", e),
        },
        Err(e) => {
            tracing::warn!("Live view refresh failed: {}", e);
            event_bus.publish(ServerEvent::with_payload(
                VIBES_REFRESH_ERROR,
                json!({ "error": e.to_string() }),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use vibecheck_core::errors::Result;
    use vibecheck_core::vibes::{VibeOption, VibeRepositoryTrait};

    #[derive(Default)]
    struct CountingRepository {
        reads: AtomicUsize,
    }

    #[async_trait]
    impl VibeRepositoryTrait for CountingRepository {
        fn list_vibes(&self) -> Result<Vec<VibeOption>> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst) as i64;
            Ok(vec![VibeOption {
                id: "good-vibes".into(),
                name: "Good Vibes".into(),
                count: n,
            }])
        }

        async fn increment_vibe_count(&self, _vibe_name: &str) -> Result<Option<VibeOption>> {
            Ok(None)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_votes_produces_one_snapshot() {
        let repo = Arc::new(CountingRepository::default());
        let bus = EventBus::new(16);
        let mut rx_bus = bus.subscribe();
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(event_queue_worker(
            rx,
            LiveView::new(repo.clone()),
            bus.clone(),
        ));

        for _ in 0..5 {
            tx.send(DomainEvent::vibe_count_changed("Good Vibes")).unwrap();
        }
        tx.send(DomainEvent::setting_changed("censor_bad_vibes", true))
            .unwrap();

        let evt = rx_bus.recv().await.unwrap();
        assert_eq!(evt.name, VIBES_UPDATED);

        drop(tx);
        worker.await.unwrap();

        // initial load + one refresh
        assert_eq!(repo.reads.load(Ordering::SeqCst), 2);
        assert!(rx_bus.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn steady_voting_still_refreshes_the_live_view() {
        let repo = Arc::new(CountingRepository::default());
        let bus = EventBus::new(256);
        let mut rx_bus = bus.subscribe();
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(event_queue_worker(rx, LiveView::new(repo.clone()), bus));

        // One vote every 200 ms for 60 s, always inside the debounce window.
        for _ in 0..300 {
            tx.send(DomainEvent::vibe_count_changed("Good Vibes")).unwrap();
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        drop(tx);
        worker.await.unwrap();

        let mut snapshots = 0;
        while let Ok(evt) = rx_bus.try_recv() {
            assert_eq!(evt.name, VIBES_UPDATED);
            snapshots += 1;
        }
        // At least one snapshot per 500 ms of voting.
        assert!(snapshots >= 120, "only {} snapshots in 60s", snapshots);
        assert_eq!(repo.reads.load(Ordering::SeqCst), snapshots + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn setting_only_batch_is_not_broadcast() {
        let repo = Arc::new(CountingRepository::default());
        let bus = EventBus::new(16);
        let mut rx_bus = bus.subscribe();
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(event_queue_worker(rx, LiveView::new(repo.clone()), bus));

        tx.send(DomainEvent::setting_changed("censor_bad_vibes", true))
            .unwrap();
        tokio::time::sleep(DEBOUNCE_DURATION * 4).await;
        drop(tx);
        worker.await.unwrap();

        assert_eq!(repo.reads.load(Ordering::SeqCst), 1);
        assert!(rx_bus.try_recv().is_err());
    }
}
