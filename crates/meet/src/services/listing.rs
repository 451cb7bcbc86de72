use crate::dto::event::{EventParticipants, EventSummary, ParticipantDetail, RelayParticipantDetail};
use crate::dto::swimmer::{SwimmerDetailResponse, SwimmerEventInfo, SwimmerInfo, SwimmerRelayInfo};
use crate::error::Result;
use crate::models::{IndividualEntry, RaceTime, Swimmer};
use crate::repository::MeetStore;

/// Number of swimmers that qualify for a final from the heats.
pub const FINALISTS: usize = 8;

pub fn swimmer_info(store: &MeetStore, swimmer: &Swimmer) -> SwimmerInfo {
    SwimmerInfo {
        swimmer_id: swimmer.swimmer_id,
        name: swimmer.name.clone(),
        date_of_birth: swimmer.date_of_birth,
        age_group: swimmer.age_group,
        gender: swimmer.gender,
        club_id: swimmer.club_id,
        club_name: club_name(store, swimmer.club_id),
        federation_id: swimmer.federation_id.clone(),
    }
}

pub fn swimmer_detail(store: &MeetStore, swimmer_id: i32) -> Result<SwimmerDetailResponse> {
    let swimmer = store.find_swimmer(swimmer_id)?;

    let events = store
        .individual_entries_for_swimmer(swimmer_id)
        .into_iter()
        .map(|e| SwimmerEventInfo {
            entry_id: e.entry_id,
            event_id: e.event_id,
            event_name: event_name(store, e.event_id),
            heat: e.heat,
            lane: e.lane,
            time: e.time.clone(),
            medal: e.medal.clone(),
        })
        .collect();

    let relay_events = store
        .relay_entries_for_swimmer(swimmer_id)
        .into_iter()
        .map(|r| SwimmerRelayInfo {
            relay_id: r.relay_id,
            event_id: r.event_id,
            event_name: event_name(store, r.event_id),
        })
        .collect();

    Ok(SwimmerDetailResponse {
        swimmer: swimmer_info(store, swimmer),
        events,
        relay_events,
    })
}

pub fn event_summaries(store: &MeetStore) -> Vec<EventSummary> {
    store
        .list_events()
        .into_iter()
        .map(|event| {
            let participant_count = if event.relay {
                store.count_relay_clubs(event.event_id)
            } else {
                store.count_individual_entries(event.event_id)
            };
            EventSummary {
                event: event.clone(),
                participant_count,
            }
        })
        .collect()
}

/// Seated entrants of an event, in heat then lane order.
pub fn event_participants(store: &MeetStore, event_id: i32) -> Result<EventParticipants> {
    let event = store.find_event(event_id)?;

    if event.relay {
        let mut relays = store.relay_entries_for_event(event_id);
        relays.sort_by_key(|r| (r.heat, r.lane));

        let rows = relays
            .into_iter()
            .map(|r| RelayParticipantDetail {
                relay_id: r.relay_id,
                heat: r.heat,
                lane: r.lane,
                time: r.time.clone(),
                medal: r.medal.clone(),
                club_id: r.club_id,
                club_name: club_name(store, r.club_id),
                swimmers: roster_names(store, &r.roster),
            })
            .collect();
        return Ok(EventParticipants::Relay(rows));
    }

    let mut entries = store.individual_entries_for_event(event_id);
    entries.sort_by_key(|e| (e.heat, e.lane));
    Ok(EventParticipants::Individual(participant_rows(store, entries)))
}

/// Swimmers whose age group and gender match the event.
pub fn eligible_swimmers(store: &MeetStore, event_id: i32) -> Result<Vec<SwimmerInfo>> {
    let event = store.find_event(event_id)?;

    Ok(store
        .swimmers
        .values()
        .filter(|s| s.age_group == event.age_group && s.gender == event.gender)
        .map(|s| swimmer_info(store, s))
        .collect())
}

/// The fastest heat swimmers of an individual event, at most
/// [`FINALISTS`]. Untimed and unreadable times rank last.
pub fn top_participants(store: &MeetStore, event_id: i32) -> Result<Vec<ParticipantDetail>> {
    store.find_event(event_id)?;

    let mut entries = store.individual_entries_for_event(event_id);
    entries.sort_by_key(|e| {
        (
            RaceTime::from_recorded(e.time.as_deref()).unwrap_or(RaceTime::NotTimed),
            e.entry_id,
        )
    });
    entries.truncate(FINALISTS);

    Ok(participant_rows(store, entries))
}

fn participant_rows(store: &MeetStore, entries: Vec<&IndividualEntry>) -> Vec<ParticipantDetail> {
    entries
        .into_iter()
        .filter_map(|e| {
            let swimmer = store.find_swimmer(e.swimmer_id).ok()?;
            Some(ParticipantDetail {
                entry_id: e.entry_id,
                heat: e.heat,
                lane: e.lane,
                time: e.time.clone(),
                medal: e.medal.clone(),
                swimmer: swimmer_info(store, swimmer),
            })
        })
        .collect()
}

pub(crate) fn club_name(store: &MeetStore, club_id: i32) -> String {
    store
        .find_club(club_id)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}

pub(crate) fn roster_names(store: &MeetStore, roster: &[i32]) -> Vec<String> {
    roster
        .iter()
        .filter_map(|id| store.find_swimmer(*id).ok())
        .map(|s| s.name.clone())
        .collect()
}

fn event_name(store: &MeetStore, event_id: i32) -> String {
    store
        .find_event(event_id)
        .map(|e| e.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entries;
    use crate::testing;

    #[test]
    fn test_event_summaries_count_relay_clubs() {
        let mut store = MeetStore::new();
        let free = testing::event(&mut store, "50 mt. Freestyle");
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Sharks", "B");
        let club = store.find_swimmer(a).unwrap().club_id;
        testing::enter(&mut store, a, free);
        entries::add_relay_entry(&mut store, club, relay, a).unwrap();
        entries::add_relay_entry(&mut store, club, relay, b).unwrap();

        let counts: Vec<(i32, usize)> = event_summaries(&store)
            .into_iter()
            .map(|s| (s.event.event_id, s.participant_count))
            .collect();
        assert_eq!(counts, vec![(free, 1), (relay, 1)]);
    }

    #[test]
    fn test_event_participants_in_seat_order() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        for name in ["A", "B", "C"] {
            let swimmer = testing::swimmer(&mut store, name, name);
            testing::enter(&mut store, swimmer, event);
        }

        let EventParticipants::Individual(rows) = event_participants(&store, event).unwrap() else {
            panic!("expected individual participants");
        };
        let names: Vec<(&str, u8)> = rows.iter().map(|r| (r.swimmer.name.as_str(), r.lane)).collect();
        assert_eq!(names, vec![("C", 3), ("A", 4), ("B", 5)]);
    }

    #[test]
    fn test_eligible_swimmers_match_cohort() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Sharks", "B");
        store.swimmers.get_mut(b).unwrap().age_group = crate::models::AgeGroup(3);

        let eligible: Vec<i32> = eligible_swimmers(&store, event)
            .unwrap()
            .into_iter()
            .map(|s| s.swimmer_id)
            .collect();
        assert_eq!(eligible, vec![a]);
    }

    #[test]
    fn test_top_participants_caps_at_finalists() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "100 mt. Freestyle");
        for i in 0..10 {
            let swimmer = testing::swimmer(&mut store, &format!("Club {i}"), &format!("S{i}"));
            let entry = testing::enter(&mut store, swimmer, event);
            let time = (i != 0).then(|| format!("01:{:02}:00", 20 - i));
            testing::set_time(&mut store, entry, time.as_deref());
        }

        let top = top_participants(&store, event).unwrap();

        assert_eq!(top.len(), FINALISTS);
        assert_eq!(top[0].swimmer.name, "S9");
        assert!(top.iter().all(|p| p.swimmer.name != "S0"));
    }

    #[test]
    fn test_swimmer_detail_lists_relays() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let club = store.find_swimmer(a).unwrap().club_id;
        entries::add_relay_entry(&mut store, club, relay, a).unwrap();

        let detail = swimmer_detail(&store, a).unwrap();

        assert_eq!(detail.swimmer.club_name, "Sharks");
        assert!(detail.events.is_empty());
        assert_eq!(detail.relay_events[0].event_name, "4x50 mt. Freestyle Relay");
    }
}
