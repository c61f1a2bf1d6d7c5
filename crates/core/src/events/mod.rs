//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. The web runtime implements the sink
//! to turn ledger changes into live tally refreshes.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
