//! Planning functions for batches of domain events.

use std::collections::BTreeMap;

use vibecheck_core::events::DomainEvent;

/// True when at least one event in the batch changed the vote ledger.
/// Any number of ledger events collapses into a single refresh.
pub fn plan_ledger_refresh(events: &[DomainEvent]) -> bool {
    events.iter().any(DomainEvent::touches_ledger)
}

/// Final value per setting key within the batch, last write wins.
pub fn collect_setting_changes(events: &[DomainEvent]) -> BTreeMap<String, bool> {
    let mut changes = BTreeMap::new();
    for event in events {
        if let DomainEvent::SettingChanged { key, value } = event {
            changes.insert(key.clone(), *value);
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_needs_no_refresh() {
        assert!(!plan_ledger_refresh(&[]));
        assert!(collect_setting_changes(&[]).is_empty());
    }

    #[test]
    fn votes_collapse_into_one_refresh() {
        let events = vec![
            DomainEvent::vibe_count_changed("Good Vibes"),
            DomainEvent::vibe_count_changed("Bad Vibes"),
            DomainEvent::vibe_count_changed("Good Vibes"),
        ];
        assert!(plan_ledger_refresh(&events));
    }

    #[test]
    fn setting_changes_alone_do_not_refresh_the_ledger() {
        let events = vec![DomainEvent::setting_changed("censor_bad_vibes", true)];
        assert!(!plan_ledger_refresh(&events));
    }

    #[test]
    fn last_setting_value_wins() {
        let events = vec![
            DomainEvent::setting_changed("censor_bad_vibes", true),
            DomainEvent::vibe_count_changed("Neutral Vibes"),
            DomainEvent::setting_changed("censor_bad_vibes", false),
        ];
        let changes = collect_setting_changes(&events);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get("censor_bad_vibes"), Some(&false));
        assert!(plan_ledger_refresh(&events));
    }
}
