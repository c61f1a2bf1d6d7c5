//! Aggregate view of the ledger: per-option percentages and the
//! "overall vibe" verdict.

use serde::{Deserialize, Serialize};

use crate::constants::{BAD_VIBES_LABEL, GOOD_VIBES_LABEL, NEUTRAL_VIBES_LABEL};
use crate::vibes::VibeOption;

/// Verdict derived from the good/neutral/bad counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallVibe {
    /// The ledger has no rows at all.
    NoVibes,
    /// Rows exist but nobody has voted.
    NoVotes,
    PureGood,
    ChillGood,
    SeriouslyBad,
    MixedNegative,
    Neutral,
}

impl OverallVibe {
    /// Applies the threshold table, first match wins:
    ///
    /// | condition                | verdict         |
    /// |--------------------------|-----------------|
    /// | good% > 60               | `PureGood`      |
    /// | good% > 30 and bad% < 20 | `ChillGood`     |
    /// | bad% > 40                | `SeriouslyBad`  |
    /// | bad% > 20                | `MixedNegative` |
    /// | otherwise                | `Neutral`       |
    pub fn from_counts(good: i64, neutral: i64, bad: i64) -> Self {
        let total = good + neutral + bad;
        if total <= 0 {
            return OverallVibe::NoVotes;
        }

        let good_pct = percentage(good, total);
        let bad_pct = percentage(bad, total);

        if good_pct > 60.0 {
            OverallVibe::PureGood
        } else if good_pct > 30.0 && bad_pct < 20.0 {
            OverallVibe::ChillGood
        } else if bad_pct > 40.0 {
            OverallVibe::SeriouslyBad
        } else if bad_pct > 20.0 {
            OverallVibe::MixedNegative
        } else {
            OverallVibe::Neutral
        }
    }

    /// Locates the three tallied categories by label and classifies them.
    /// A category with no matching row counts as zero.
    pub fn from_vibes(vibes: &[VibeOption]) -> Self {
        if vibes.is_empty() {
            return OverallVibe::NoVibes;
        }
        OverallVibe::from_counts(
            count_for(vibes, GOOD_VIBES_LABEL),
            count_for(vibes, NEUTRAL_VIBES_LABEL),
            count_for(vibes, BAD_VIBES_LABEL),
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverallVibe::NoVibes => "No vibes yet!",
            OverallVibe::NoVotes => "No votes yet!",
            OverallVibe::PureGood => "✨ Pure Good Vibes! ✨",
            OverallVibe::ChillGood => "😌 Chill Vibes, mostly good.",
            OverallVibe::SeriouslyBad => "😬 Some seriously bad vibes brewing...",
            OverallVibe::MixedNegative => "🧐 Mixed vibes, lean negative.",
            OverallVibe::Neutral => "⚖️ Neutral vibes, balanced.",
        }
    }
}

fn count_for(vibes: &[VibeOption], label: &str) -> i64 {
    vibes
        .iter()
        .find(|v| v.name.contains(label))
        .map(|v| v.count)
        .unwrap_or(0)
}

fn percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

/// One option's share of all votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeShare {
    pub name: String,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeSummary {
    pub total_votes: i64,
    pub shares: Vec<VibeShare>,
    pub overall: OverallVibe,
    pub label: String,
}

impl VibeSummary {
    pub fn from_vibes(vibes: &[VibeOption]) -> Self {
        let total_votes: i64 = vibes.iter().map(|v| v.count).sum();
        let shares = vibes
            .iter()
            .map(|v| VibeShare {
                name: v.name.clone(),
                count: v.count,
                percentage: percentage(v.count, total_votes),
            })
            .collect();
        let overall = OverallVibe::from_vibes(vibes);
        VibeSummary {
            total_votes,
            shares,
            overall,
            label: overall.label().to_string(),
        }
    }
}
