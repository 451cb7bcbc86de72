use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{MeetError, Result};
use crate::models::{EntryRef, HeatLane, IndividualEntry, RelayEntry, Swimmer};
use crate::repository::MeetStore;

use super::allocation::{self, LANE_ORDER};

/// Enters a swimmer in an individual event, seated after the existing
/// entrants.
pub fn add_individual_entry(
    store: &mut MeetStore,
    swimmer_id: i32,
    event_id: i32,
) -> Result<IndividualEntry> {
    store.find_swimmer(swimmer_id)?;
    let event = store.find_event(event_id)?;
    if event.relay {
        return Err(MeetError::ConstraintViolation(format!(
            "Event '{}' is a relay, enter the club team instead",
            event.name
        )));
    }

    if store
        .find_individual_entry_for(swimmer_id, event_id)
        .is_some()
    {
        return Err(MeetError::DuplicateEntry(format!(
            "Swimmer {} is already entered in event {}",
            swimmer_id, event_id
        )));
    }

    let taken = store
        .individual_entries_for_event(event_id)
        .iter()
        .map(|e| e.slot())
        .collect();
    let slot = allocation::next_free(&taken);
    let entry = store.insert_individual_entry(swimmer_id, event_id, slot);
    verify_event(store, event_id)?;

    info!(
        swimmer_id,
        event_id,
        heat = slot.heat,
        lane = slot.lane,
        "Added individual entry"
    );
    Ok(entry)
}

/// Adds a swimmer to their club's team in a relay event, creating and
/// seating the team first if the club has none yet. Joining an existing
/// team never moves it.
pub fn add_relay_entry(
    store: &mut MeetStore,
    club_id: i32,
    event_id: i32,
    swimmer_id: i32,
) -> Result<RelayEntry> {
    store.find_club(club_id)?;
    let event = store.find_event(event_id)?;
    if !event.relay {
        return Err(MeetError::ConstraintViolation(format!(
            "Event '{}' is not a relay",
            event.name
        )));
    }
    let swimmer = store.find_swimmer(swimmer_id)?;
    if swimmer.club_id != club_id {
        return Err(MeetError::ConstraintViolation(format!(
            "Swimmer {} does not swim for club {}",
            swimmer_id, club_id
        )));
    }

    let existing = store
        .find_relay_entry_for(club_id, event_id)
        .map(|r| r.relay_id);
    let relay_id = match existing {
        Some(relay_id) => relay_id,
        None => {
            let taken = store
                .relay_entries_for_event(event_id)
                .iter()
                .map(|r| r.slot())
                .collect();
            let slot = allocation::next_free(&taken);
            let relay = store.insert_relay_entry(club_id, event_id, slot);
            verify_event(store, event_id)?;
            info!(
                club_id,
                event_id,
                heat = slot.heat,
                lane = slot.lane,
                "Added relay team"
            );
            relay.relay_id
        }
    };

    let relay = store.relay_entry_mut(relay_id)?;
    if relay.roster.contains(&swimmer_id) {
        return Err(MeetError::DuplicateEntry(format!(
            "Swimmer {} is already on relay team {}",
            swimmer_id, relay_id
        )));
    }
    relay.roster.push(swimmer_id);
    Ok(relay.clone())
}

/// Deletes one entry row and re-seeds what is left of its event.
///
/// Removing an individual entry also drops the swimmer's final-round row for
/// that event. Final-round rows carry no seat, so removing one re-seeds
/// nothing.
pub fn remove_entry(store: &mut MeetStore, entry: EntryRef) -> Result<()> {
    match entry {
        EntryRef::Individual(id) => {
            let removed = store.delete_individual_entry(id)?;
            store.delete_final_entries_for(removed.swimmer_id, Some(removed.event_id));
            recalculate_heats_lanes(store, removed.event_id)?;
            info!(
                entry_id = id,
                event_id = removed.event_id,
                "Removed individual entry"
            );
        }
        EntryRef::Relay(id) => {
            let removed = store.delete_relay_entry(id)?;
            recalculate_heats_lanes(store, removed.event_id)?;
            info!(
                relay_id = id,
                event_id = removed.event_id,
                "Removed relay team"
            );
        }
        EntryRef::Final(id) => {
            store.delete_final_entry(id)?;
            info!(final_id = id, "Removed final-round entry");
        }
    }
    Ok(())
}

/// Deletes a swimmer with every entry and relay membership they hold.
///
/// A relay team left without swimmers is withdrawn. Each event that lost a
/// seat is re-seeded once, after all rows are gone.
pub fn remove_swimmer(store: &mut MeetStore, swimmer_id: i32) -> Result<Swimmer> {
    store.find_swimmer(swimmer_id)?;

    let mut touched_events = BTreeSet::new();

    let entry_ids: Vec<i32> = store
        .individual_entries_for_swimmer(swimmer_id)
        .iter()
        .map(|e| e.entry_id)
        .collect();
    for id in entry_ids {
        let removed = store.delete_individual_entry(id)?;
        touched_events.insert(removed.event_id);
    }
    store.delete_final_entries_for(swimmer_id, None);

    let relay_ids: Vec<i32> = store
        .relay_entries_for_swimmer(swimmer_id)
        .iter()
        .map(|r| r.relay_id)
        .collect();
    for id in relay_ids {
        let relay = store.relay_entry_mut(id)?;
        relay.roster.retain(|member| *member != swimmer_id);
        if relay.roster.is_empty() {
            let removed = store.delete_relay_entry(id)?;
            touched_events.insert(removed.event_id);
        }
    }

    let swimmer = store.delete_swimmer_row(swimmer_id)?;

    for event_id in &touched_events {
        recalculate_heats_lanes(store, *event_id)?;
    }

    info!(
        swimmer_id,
        events_reseeded = touched_events.len(),
        "Removed swimmer"
    );
    Ok(swimmer)
}

/// Re-seeds every entry of an event from scratch: timed entries first by
/// time, then untimed ones in registration order. Returns the number of
/// entries seated.
pub fn recalculate_heats_lanes(store: &mut MeetStore, event_id: i32) -> Result<usize> {
    let relay = store.find_event(event_id)?.relay;

    let seats = if relay {
        allocation::reseed(
            event_id,
            store
                .relay_entries_for_event(event_id)
                .into_iter()
                .map(|r| (r.relay_id, r.time.as_deref())),
        )
    } else {
        allocation::reseed(
            event_id,
            store
                .individual_entries_for_event(event_id)
                .into_iter()
                .map(|e| (e.entry_id, e.time.as_deref())),
        )
    };

    for (id, slot) in &seats {
        if relay {
            let entry = store.relay_entry_mut(*id)?;
            entry.heat = slot.heat;
            entry.lane = slot.lane;
        } else {
            store.set_individual_slot(*id, *slot)?;
        }
    }
    verify_event(store, event_id)?;

    debug!(event_id, entries = seats.len(), "Recalculated heats and lanes");
    Ok(seats.len())
}

/// Moves an entry to a chosen seat. If another entry of the same event holds
/// that seat, the two swap.
pub fn assign_lane(store: &mut MeetStore, entry: EntryRef, target: HeatLane) -> Result<()> {
    if target.heat == 0 || !LANE_ORDER.contains(&target.lane) {
        return Err(MeetError::ConstraintViolation(format!(
            "Heat {} lane {} is not a valid seat",
            target.heat, target.lane
        )));
    }

    let event_id = match entry {
        EntryRef::Individual(id) => {
            let moving = store.find_individual_entry(id)?;
            let (event_id, current) = (moving.event_id, moving.slot());
            let occupant = store
                .individual_entries_for_event(event_id)
                .into_iter()
                .find(|e| e.entry_id != id && e.slot() == target)
                .map(|e| e.entry_id);

            if let Some(other) = occupant {
                store.set_individual_slot(other, current)?;
            }
            store.set_individual_slot(id, target)?;
            event_id
        }
        EntryRef::Relay(id) => {
            let moving = store.find_relay_entry(id)?;
            let (event_id, current) = (moving.event_id, moving.slot());
            let occupant = store
                .relay_entries_for_event(event_id)
                .into_iter()
                .find(|r| r.relay_id != id && r.slot() == target)
                .map(|r| r.relay_id);

            if let Some(other) = occupant {
                let other = store.relay_entry_mut(other)?;
                other.heat = current.heat;
                other.lane = current.lane;
            }
            let relay = store.relay_entry_mut(id)?;
            relay.heat = target.heat;
            relay.lane = target.lane;
            event_id
        }
        EntryRef::Final(id) => {
            return Err(MeetError::ConstraintViolation(format!(
                "Final-round entry {} has no lane",
                id
            )));
        }
    };

    verify_event(store, event_id)?;
    info!(?entry, heat = target.heat, lane = target.lane, "Moved entry");
    Ok(())
}

fn verify_event(store: &MeetStore, event_id: i32) -> Result<()> {
    let slots: Vec<HeatLane> = if store.find_event(event_id)?.relay {
        store
            .relay_entries_for_event(event_id)
            .iter()
            .map(|r| r.slot())
            .collect()
    } else {
        store
            .individual_entries_for_event(event_id)
            .iter()
            .map(|e| e.slot())
            .collect()
    };
    allocation::verify_capacity(event_id, slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn seats(store: &MeetStore, event_id: i32) -> Vec<(i32, HeatLane)> {
        store
            .individual_entries_for_event(event_id)
            .into_iter()
            .map(|e| (e.swimmer_id, e.slot()))
            .collect()
    }

    fn seat(heat: u32, lane: u8) -> HeatLane {
        HeatLane { heat, lane }
    }

    #[test]
    fn test_add_individual_entry_appends_in_lane_order() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let swimmers: Vec<i32> = (0..9)
            .map(|i| testing::swimmer(&mut store, &format!("Club {i}"), &format!("S{i}")))
            .collect();
        for &swimmer in &swimmers {
            testing::enter(&mut store, swimmer, event);
        }

        let lanes: Vec<HeatLane> = seats(&store, event).into_iter().map(|(_, s)| s).collect();
        assert_eq!(lanes[0], seat(1, 4));
        assert_eq!(lanes[1], seat(1, 5));
        assert_eq!(lanes[7], seat(1, 8));
        assert_eq!(lanes[8], seat(2, 4));
    }

    #[test]
    fn test_add_individual_entry_rejects_duplicate() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let swimmer = testing::swimmer(&mut store, "Sharks", "A");
        testing::enter(&mut store, swimmer, event);

        let result = add_individual_entry(&mut store, swimmer, event);

        assert!(matches!(result, Err(MeetError::DuplicateEntry(_))));
        assert_eq!(store.count_individual_entries(event), 1);
    }

    #[test]
    fn test_add_individual_entry_rejects_relay_event() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Medley Relay");
        let swimmer = testing::swimmer(&mut store, "Sharks", "A");

        let result = add_individual_entry(&mut store, swimmer, relay);
        assert!(matches!(result, Err(MeetError::ConstraintViolation(_))));
    }

    #[test]
    fn test_add_individual_entry_unknown_swimmer() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");

        let err = add_individual_entry(&mut store, 42, event).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_relay_entry_joins_existing_team_without_moving_it() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Sharks", "B");
        let c = testing::swimmer(&mut store, "Orcas", "C");
        let sharks = store.find_swimmer(a).unwrap().club_id;
        let orcas = store.find_swimmer(c).unwrap().club_id;

        let first = add_relay_entry(&mut store, sharks, relay, a).unwrap();
        let other = add_relay_entry(&mut store, orcas, relay, c).unwrap();
        let joined = add_relay_entry(&mut store, sharks, relay, b).unwrap();

        assert_eq!(first.relay_id, joined.relay_id);
        assert_eq!(joined.roster, vec![a, b]);
        assert_eq!(joined.slot(), seat(1, 4));
        assert_eq!(other.slot(), seat(1, 5));
        assert_eq!(store.count_relay_clubs(relay), 2);
    }

    #[test]
    fn test_add_relay_entry_rejects_swimmer_of_other_club() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let c = testing::swimmer(&mut store, "Orcas", "C");
        let orcas = store.find_swimmer(c).unwrap().club_id;

        let result = add_relay_entry(&mut store, orcas, relay, a);
        assert!(matches!(result, Err(MeetError::ConstraintViolation(_))));
        assert!(store.relay_entries_for_event(relay).is_empty());
    }

    #[test]
    fn test_add_relay_entry_rejects_repeat_member() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let sharks = store.find_swimmer(a).unwrap().club_id;
        add_relay_entry(&mut store, sharks, relay, a).unwrap();

        let result = add_relay_entry(&mut store, sharks, relay, a);
        assert!(matches!(result, Err(MeetError::DuplicateEntry(_))));
    }

    #[test]
    fn test_remove_entry_closes_the_gap() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "100 mt. Butterfly");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Orcas", "B");
        let c = testing::swimmer(&mut store, "Rays", "C");
        let ea = testing::enter(&mut store, a, event);
        testing::enter(&mut store, b, event);
        testing::enter(&mut store, c, event);

        remove_entry(&mut store, EntryRef::Individual(ea)).unwrap();

        assert_eq!(seats(&store, event), vec![(b, seat(1, 4)), (c, seat(1, 5))]);
    }

    #[test]
    fn test_remove_entry_drops_final_round_row() {
        let mut store = MeetStore::new();
        let event = testing::final_event(&mut store, "200 mt. Freestyle");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let entry = testing::enter(&mut store, a, event);
        store.insert_final_entry(a, event, Some("02:10:00".to_string()));

        remove_entry(&mut store, EntryRef::Individual(entry)).unwrap();

        assert!(store.find_final_entry_for(a, event).is_none());
    }

    #[test]
    fn test_remove_swimmer_cascades_and_reseeds_each_event() {
        let mut store = MeetStore::new();
        let e1 = testing::event(&mut store, "50 mt. Freestyle");
        let e2 = testing::event(&mut store, "50 mt. Backstroke");
        let leaving = testing::swimmer(&mut store, "Sharks", "Leaving");
        testing::enter(&mut store, leaving, e1);
        testing::enter(&mut store, leaving, e2);
        let others: Vec<i32> = ["X", "Y", "Z"]
            .iter()
            .map(|name| {
                let swimmer = testing::swimmer(&mut store, "Orcas", name);
                testing::enter(&mut store, swimmer, e1);
                swimmer
            })
            .collect();

        let removed = remove_swimmer(&mut store, leaving).unwrap();

        assert_eq!(removed.name, "Leaving");
        assert!(store.find_swimmer(leaving).is_err());
        assert_eq!(
            seats(&store, e1),
            vec![
                (others[0], seat(1, 4)),
                (others[1], seat(1, 5)),
                (others[2], seat(1, 3)),
            ]
        );
        assert_eq!(store.count_individual_entries(e2), 0);
    }

    #[test]
    fn test_remove_swimmer_withdraws_emptied_relay_team() {
        let mut store = MeetStore::new();
        let relay = testing::relay_event(&mut store, "4x50 mt. Freestyle Relay");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Sharks", "B");
        let c = testing::swimmer(&mut store, "Orcas", "C");
        let sharks = store.find_swimmer(a).unwrap().club_id;
        let orcas = store.find_swimmer(c).unwrap().club_id;
        add_relay_entry(&mut store, sharks, relay, a).unwrap();
        add_relay_entry(&mut store, sharks, relay, b).unwrap();
        let orca_team = add_relay_entry(&mut store, orcas, relay, c).unwrap();

        remove_swimmer(&mut store, a).unwrap();
        let sharks_team = store.find_relay_entry_for(sharks, relay).unwrap();
        assert_eq!(sharks_team.roster, vec![b]);

        remove_swimmer(&mut store, b).unwrap();
        assert!(store.find_relay_entry_for(sharks, relay).is_none());
        let remaining = store.find_relay_entry(orca_team.relay_id).unwrap();
        assert_eq!(remaining.slot(), seat(1, 4));
    }

    #[test]
    fn test_recalculate_seeds_fastest_first() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "100 mt. Breaststroke");
        let mut ids = Vec::new();
        for (name, time) in [("A", None), ("B", Some("01:20:00")), ("C", Some("01:15:00"))] {
            let swimmer = testing::swimmer(&mut store, name, name);
            let entry = testing::enter(&mut store, swimmer, event);
            testing::set_time(&mut store, entry, time);
            ids.push(swimmer);
        }

        let seated = recalculate_heats_lanes(&mut store, event).unwrap();

        assert_eq!(seated, 3);
        let mut by_lane = seats(&store, event);
        by_lane.sort_by_key(|(_, s)| *s);
        assert_eq!(
            by_lane,
            vec![
                (ids[0], seat(1, 3)),
                (ids[2], seat(1, 4)),
                (ids[1], seat(1, 5)),
            ]
        );
    }

    #[test]
    fn test_recalculate_twice_keeps_the_same_seats() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "100 mt. Freestyle");
        let times = [
            Some("01:00:00"),
            Some("00:58:00"),
            None,
            Some("00:58:00"),
            Some("88:88:88"),
            Some("fast"),
            Some("99:99:99"),
            Some("01:01:00"),
            None,
        ];
        let mut ids = Vec::new();
        for (i, time) in times.into_iter().enumerate() {
            let swimmer = testing::swimmer(&mut store, "Sharks", &format!("S{i}"));
            let entry = testing::enter(&mut store, swimmer, event);
            testing::set_time(&mut store, entry, time);
            ids.push(swimmer);
        }

        recalculate_heats_lanes(&mut store, event).unwrap();
        let first = seats(&store, event);
        recalculate_heats_lanes(&mut store, event).unwrap();

        assert_eq!(seats(&store, event), first);
        let mut by_seat = first;
        by_seat.sort_by_key(|(_, s)| *s);
        assert_eq!(
            by_seat,
            vec![
                (ids[2], seat(1, 1)),
                (ids[4], seat(1, 2)),
                (ids[0], seat(1, 3)),
                (ids[1], seat(1, 4)),
                (ids[3], seat(1, 5)),
                (ids[7], seat(1, 6)),
                (ids[6], seat(1, 7)),
                (ids[5], seat(1, 8)),
                (ids[8], seat(2, 4)),
            ]
        );
    }

    #[test]
    fn test_assign_lane_swaps_with_occupant() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Orcas", "B");
        let ea = testing::enter(&mut store, a, event);
        let eb = testing::enter(&mut store, b, event);

        assign_lane(&mut store, EntryRef::Individual(eb), seat(1, 4)).unwrap();

        assert_eq!(store.find_individual_entry(eb).unwrap().slot(), seat(1, 4));
        assert_eq!(store.find_individual_entry(ea).unwrap().slot(), seat(1, 5));
    }

    #[test]
    fn test_entry_after_manual_move_takes_free_seat() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let b = testing::swimmer(&mut store, "Orcas", "B");
        let c = testing::swimmer(&mut store, "Rays", "C");
        testing::enter(&mut store, a, event);
        let eb = testing::enter(&mut store, b, event);
        assign_lane(&mut store, EntryRef::Individual(eb), seat(1, 3)).unwrap();

        let ec = testing::enter(&mut store, c, event);

        assert_eq!(store.find_individual_entry(ec).unwrap().slot(), seat(1, 6));
    }

    #[test]
    fn test_assign_lane_rejects_invalid_seat() {
        let mut store = MeetStore::new();
        let event = testing::event(&mut store, "50 mt. Freestyle");
        let a = testing::swimmer(&mut store, "Sharks", "A");
        let ea = testing::enter(&mut store, a, event);

        let result = assign_lane(&mut store, EntryRef::Individual(ea), seat(1, 9));
        assert!(matches!(result, Err(MeetError::ConstraintViolation(_))));
        let result = assign_lane(&mut store, EntryRef::Final(1), seat(1, 4));
        assert!(matches!(result, Err(MeetError::ConstraintViolation(_))));
    }
}
