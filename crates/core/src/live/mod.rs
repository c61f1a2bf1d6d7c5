//! Live tally: a view of the ledger kept current by change notifications.
//!
//! Every notification triggers a full re-read, so missed or reordered
//! notifications are repaired by the next one.

mod live_view;

pub use live_view::{LiveView, LiveViewState, VibeSnapshot};
