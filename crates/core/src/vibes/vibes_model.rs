use serde::{Deserialize, Serialize};

/// One voting option and its running tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeOption {
    pub id: String,
    pub name: String,
    pub count: i64,
}

/// Result of a vote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The ledger row was incremented; carries the updated row.
    Counted(VibeOption),
    /// The vote was accepted but not tallied.
    Censored,
}

impl VoteOutcome {
    pub fn is_censored(&self) -> bool {
        matches!(self, VoteOutcome::Censored)
    }
}
