use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::vibes::{VibeOption, VibeRepositoryTrait, VibeSummary};

/// Full picture of the ledger at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeSnapshot {
    /// Options sorted by name.
    pub vibes: Vec<VibeOption>,
    pub summary: VibeSummary,
    pub refreshed_at: DateTime<Utc>,
}

impl VibeSnapshot {
    pub fn from_vibes(mut vibes: Vec<VibeOption>) -> Self {
        vibes.sort_by(|a, b| a.name.cmp(&b.name));
        let summary = VibeSummary::from_vibes(&vibes);
        VibeSnapshot {
            vibes,
            summary,
            refreshed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiveViewState {
    /// Initial read not yet successful.
    Loading,
    /// Subscribed; holds the latest full read.
    Ready(VibeSnapshot),
}

pub struct LiveView {
    repository: Arc<dyn VibeRepositoryTrait>,
    state: LiveViewState,
}

impl LiveView {
    pub fn new(repository: Arc<dyn VibeRepositoryTrait>) -> Self {
        LiveView {
            repository,
            state: LiveViewState::Loading,
        }
    }

    pub fn state(&self) -> &LiveViewState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LiveViewState::Ready(_))
    }

    pub fn snapshot(&self) -> Option<&VibeSnapshot> {
        match &self.state {
            LiveViewState::Ready(snapshot) => Some(snapshot),
            LiveViewState::Loading => None,
        }
    }

    /// Initial full read. Moves `Loading` to `Ready` on success.
    pub fn load(&mut self) -> Result<VibeSnapshot> {
        self.resync()
    }

    /// Reaction to any ledger notification: a full re-read, never a delta.
    /// On failure the current state is kept and the error returned.
    pub fn handle_change(&mut self) -> Result<VibeSnapshot> {
        self.resync()
    }

    fn resync(&mut self) -> Result<VibeSnapshot> {
        let vibes = self.repository.list_vibes()?;
        let snapshot = VibeSnapshot::from_vibes(vibes);
        debug!(
            "Live view resynced: {} votes, {}",
            snapshot.summary.total_votes, snapshot.summary.label
        );
        self.state = LiveViewState::Ready(snapshot.clone());
        Ok(snapshot)
    }
}
