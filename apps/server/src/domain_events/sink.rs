//! Web domain event sink implementation.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use vibecheck_core::{
    events::{DomainEvent, DomainEventSink},
    live::LiveView,
    vibes::VibeRepositoryTrait,
};

use super::queue_worker::event_queue_worker;
use crate::events::EventBus;

/// Domain event sink for the web server runtime.
///
/// Two-phase initialization: `new()` creates the channel so services can be
/// built with the sink, and `start_worker()` spawns the consumer once the
/// repository and event bus exist. Events emitted in between are buffered.
pub struct WebDomainEventSink {
    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<DomainEvent>>>,
}

impl WebDomainEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Spawns the queue worker on the current runtime. Returns `false` if a
    /// worker was already started.
    pub fn start_worker(
        &self,
        vibe_repository: Arc<dyn VibeRepositoryTrait>,
        event_bus: EventBus,
    ) -> bool {
        let rx = match self.rx.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(rx) = rx else {
            tracing::error!("Domain event worker already started");
            return false;
        };

        tokio::spawn(event_queue_worker(
            rx,
            LiveView::new(vibe_repository),
            event_bus,
        ));
        true
    }

    #[cfg(test)]
    pub fn with_sender(tx: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self {
            tx,
            rx: Mutex::new(None),
        }
    }
}

impl Default for WebDomainEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        // Best effort: a closed channel only means the worker is gone.
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to emit domain event: {}", e);
        }
    }
}
