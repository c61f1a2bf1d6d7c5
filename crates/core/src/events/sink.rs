//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard};

use super::DomainEvent;

/// Receiver of domain events.
///
/// Core services emit events through this trait after successful mutations.
///
/// - `emit()` must not block (no network calls, no DB writes)
/// - Implementations queue events for async processing
/// - Failure to emit never affects the mutation that produced the event
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events, in order.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Discards every event. Used where no live view is attached.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Sink that records emitted events, for tests.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        // A poisoned recorder still holds valid events.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a copy of everything recorded so far.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.guard().clone()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *self.guard())
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        self.guard().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_accepts_events() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::vibe_count_changed("Good Vibes"));
        sink.emit_batch(vec![
            DomainEvent::vibe_count_changed("Bad Vibes"),
            DomainEvent::setting_changed("censor_bad_vibes", true),
        ]);
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::vibe_count_changed("Good Vibes"));
        sink.emit_batch(vec![
            DomainEvent::vibe_count_changed("Neutral Vibes"),
            DomainEvent::setting_changed("censor_bad_vibes", false),
        ]);
        assert_eq!(sink.len(), 3);

        let events = sink.take();
        assert_eq!(events[0], DomainEvent::vibe_count_changed("Good Vibes"));
        assert_eq!(
            events[2],
            DomainEvent::setting_changed("censor_bad_vibes", false)
        );
        assert!(sink.is_empty());
    }
}
