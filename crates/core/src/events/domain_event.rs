//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// Events are change notifications only. Consumers re-read the ledger
/// instead of applying any payload as a delta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A vote was tallied for the named option.
    VibeCountChanged { vibe_name: String },

    /// A boolean setting was overwritten.
    SettingChanged { key: String, value: bool },
}

impl DomainEvent {
    /// Creates a VibeCountChanged event.
    pub fn vibe_count_changed(vibe_name: impl Into<String>) -> Self {
        Self::VibeCountChanged {
            vibe_name: vibe_name.into(),
        }
    }

    /// Creates a SettingChanged event.
    pub fn setting_changed(key: impl Into<String>, value: bool) -> Self {
        Self::SettingChanged {
            key: key.into(),
            value,
        }
    }

    /// Whether consumers holding a ledger view must resynchronize.
    pub fn touches_ledger(&self) -> bool {
        matches!(self, Self::VibeCountChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_tag() {
        let event = DomainEvent::vibe_count_changed("Good Vibes");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "vibe_count_changed");
        assert_eq!(json["vibe_name"], "Good Vibes");

        let event = DomainEvent::setting_changed("censor_bad_vibes", true);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "setting_changed");
        assert_eq!(json["value"], true);
    }

    #[test]
    fn test_only_vote_events_touch_ledger() {
        assert!(DomainEvent::vibe_count_changed("Bad Vibes").touches_ledger());
        assert!(!DomainEvent::setting_changed("censor_bad_vibes", false).touches_ledger());
    }
}
