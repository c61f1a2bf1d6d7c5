//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via `DomainEventSink`, batches them, and turns
//! every batch that touched the ledger into one full `vibes:updated`
//! snapshot on the event bus. Setting changes are only logged.

mod planner;
mod queue_worker;
mod sink;

pub use sink::WebDomainEventSink;
