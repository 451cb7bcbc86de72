use std::collections::BTreeMap;

use tracing::warn;

use crate::config::ScoringConfig;
use crate::dto::audit::{CapViolation, ClubDuplicate, EntryAuditReport};
use crate::error::Result;
use crate::models::Swimmer;
use crate::repository::MeetStore;

use super::listing::club_name;

/// Checks one swimmer against the individual-event cap of their age group.
/// Logs and returns the finding; the entry itself stays.
pub fn check_event_cap(
    store: &MeetStore,
    config: &ScoringConfig,
    swimmer_id: i32,
) -> Result<Option<CapViolation>> {
    let swimmer = store.find_swimmer(swimmer_id)?;
    let violation = cap_violation(store, config, swimmer);
    if let Some(v) = &violation {
        warn!(swimmer_id, "{}", v.message());
    }
    Ok(violation)
}

/// Full advisory sweep over all entries.
pub fn audit_entries(store: &MeetStore, config: &ScoringConfig) -> EntryAuditReport {
    let cap_violations = store
        .swimmers
        .values()
        .filter_map(|s| cap_violation(store, config, s))
        .collect();

    let mut by_event_club: BTreeMap<(i32, i32), Vec<String>> = BTreeMap::new();
    for entry in store.individual_entries.values() {
        if let Ok(swimmer) = store.find_swimmer(entry.swimmer_id) {
            by_event_club
                .entry((entry.event_id, swimmer.club_id))
                .or_default()
                .push(swimmer.name.clone());
        }
    }

    let club_duplicates = by_event_club
        .into_iter()
        .filter(|(_, swimmers)| swimmers.len() > 1)
        .map(|((event_id, club_id), swimmers)| ClubDuplicate {
            event_id,
            event_name: store
                .find_event(event_id)
                .map(|e| e.name.clone())
                .unwrap_or_default(),
            club_id,
            club_name: club_name(store, club_id),
            swimmers,
        })
        .collect();

    EntryAuditReport {
        cap_violations,
        club_duplicates,
    }
}

fn cap_violation(store: &MeetStore, config: &ScoringConfig, swimmer: &Swimmer) -> Option<CapViolation> {
    let cap = config.event_cap(swimmer.age_group)?;
    let entries = store
        .individual_entries_for_swimmer(swimmer.swimmer_id)
        .len();

    (entries > cap).then(|| CapViolation {
        swimmer_id: swimmer.swimmer_id,
        swimmer_name: swimmer.name.clone(),
        club_name: club_name(store, swimmer.club_id),
        age_group: swimmer.age_group,
        entries,
        cap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeGroup;
    use crate::testing;

    #[test]
    fn test_cap_violation_is_reported_not_enforced() {
        let mut store = MeetStore::new();
        let mut config = ScoringConfig::default();
        config.age_group_event_caps.insert(AgeGroup(1), 2);
        let swimmer = testing::swimmer(&mut store, "Sharks", "A");
        for i in 0..3 {
            let event = testing::event(&mut store, &format!("Event {i}"));
            testing::enter(&mut store, swimmer, event);
        }

        let violation = check_event_cap(&store, &config, swimmer).unwrap().unwrap();

        assert_eq!(violation.entries, 3);
        assert_eq!(violation.cap, 2);
        assert_eq!(store.individual_entries_for_swimmer(swimmer).len(), 3);
    }

    #[test]
    fn test_uncapped_age_group_never_violates() {
        let mut store = MeetStore::new();
        let mut config = ScoringConfig::default();
        config.age_group_event_caps.clear();
        let swimmer = testing::swimmer(&mut store, "Sharks", "A");
        let event = testing::event(&mut store, "Event");
        testing::enter(&mut store, swimmer, event);

        assert_eq!(check_event_cap(&store, &config, swimmer).unwrap(), None);
    }

    #[test]
    fn test_audit_finds_club_duplicates() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        for (club, name) in [("Sharks", "A"), ("Sharks", "B"), ("Orcas", "C")] {
            let swimmer = testing::swimmer(&mut store, club, name);
            testing::enter(&mut store, swimmer, event);
        }

        let report = audit_entries(&store, &ScoringConfig::default());

        assert!(!report.is_clean());
        assert!(report.cap_violations.is_empty());
        assert_eq!(report.club_duplicates.len(), 1);
        assert_eq!(report.club_duplicates[0].club_name, "Sharks");
        assert_eq!(report.club_duplicates[0].swimmers, vec!["A", "B"]);
        assert_eq!(report.warnings().len(), 1);
    }
}
