use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::error::{MeetError, Result};
use crate::models::{HeatLane, RaceTime};

pub const LANES_PER_HEAT: usize = 8;

/// Centre-out lane fill order: the first seed of a heat swims lane 4.
pub const LANE_ORDER: [u8; LANES_PER_HEAT] = [4, 5, 3, 6, 2, 7, 1, 8];

/// Seat for the entrant at `index` (0-based) of an event's roster.
pub fn allocate(index: usize) -> HeatLane {
    HeatLane {
        heat: (index / LANES_PER_HEAT) as u32 + 1,
        lane: LANE_ORDER[index % LANES_PER_HEAT],
    }
}

/// Append seat for a new entrant of an event that already has `taken` seats.
///
/// Starts at `allocate(taken.len())` and moves on through the allocation
/// order while that seat is held, which only happens after a manual move.
pub fn next_free(taken: &BTreeSet<HeatLane>) -> HeatLane {
    (taken.len()..)
        .map(allocate)
        .find(|slot| !taken.contains(slot))
        .unwrap_or_else(|| allocate(taken.len()))
}

/// Orders entries for re-seeding and assigns each its new seat.
///
/// Timed entries come first, fastest first; untimed entries follow in id
/// order. The result depends only on ids and times, so re-running it on an
/// unchanged roster yields the same seats. A time that no longer parses is
/// seeded as untimed.
pub fn reseed<'a>(
    event_id: i32,
    candidates: impl IntoIterator<Item = (i32, Option<&'a str>)>,
) -> Vec<(i32, HeatLane)> {
    let mut keyed: Vec<(RaceTime, i32)> = candidates
        .into_iter()
        .map(|(id, time)| {
            let key = RaceTime::from_recorded(time).unwrap_or_else(|e| {
                warn!(event_id, entry_id = id, "Seeding entry as untimed: {}", e);
                RaceTime::NotTimed
            });
            (key, id)
        })
        .collect();
    keyed.sort();

    keyed
        .into_iter()
        .enumerate()
        .map(|(index, (_, id))| (id, allocate(index)))
        .collect()
}

/// Checks that no heat holds more than eight entries and no lane is used
/// twice within a heat.
pub fn verify_capacity(event_id: i32, slots: impl IntoIterator<Item = HeatLane>) -> Result<()> {
    let mut heats: BTreeMap<u32, BTreeSet<u8>> = BTreeMap::new();

    for slot in slots {
        if slot.heat == 0 || !LANE_ORDER.contains(&slot.lane) {
            return Err(MeetError::CapacityInvariantViolation {
                event_id,
                heat: slot.heat,
                details: format!("invalid seat heat {} lane {}", slot.heat, slot.lane),
            });
        }

        let lanes = heats.entry(slot.heat).or_default();
        if !lanes.insert(slot.lane) {
            return Err(MeetError::CapacityInvariantViolation {
                event_id,
                heat: slot.heat,
                details: format!("lane {} assigned twice", slot.lane),
            });
        }
        if lanes.len() > LANES_PER_HEAT {
            return Err(MeetError::CapacityInvariantViolation {
                event_id,
                heat: slot.heat,
                details: format!("{} entries in one heat", lanes.len()),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_first_heat_follows_lane_order() {
        let lanes: Vec<u8> = (0..8).map(|i| allocate(i).lane).collect();
        assert_eq!(lanes, LANE_ORDER.to_vec());
        assert!((0..8).all(|i| allocate(i).heat == 1));
    }

    #[test]
    fn test_allocate_cycles_into_next_heat() {
        assert_eq!(allocate(8), HeatLane { heat: 2, lane: 4 });
        assert_eq!(allocate(15), HeatLane { heat: 2, lane: 8 });
        assert_eq!(allocate(16), HeatLane { heat: 3, lane: 4 });
    }

    #[test]
    fn test_allocate_never_repeats_a_seat() {
        for roster_size in 0..=41 {
            let slots: Vec<HeatLane> = (0..roster_size).map(allocate).collect();
            let unique: BTreeSet<HeatLane> = slots.iter().copied().collect();

            assert_eq!(unique.len(), roster_size);
            assert!(verify_capacity(1, slots).is_ok());
        }
    }

    #[test]
    fn test_reseed_puts_timed_entries_first() {
        let seats = reseed(
            1,
            vec![
                (1, None),
                (2, Some("00:31:00")),
                (3, Some("00:30:05")),
                (4, Some("99:99:99")),
            ],
        );

        let order: Vec<i32> = seats.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
        assert_eq!(seats[0].1, HeatLane { heat: 1, lane: 4 });
        assert_eq!(seats[3].1, HeatLane { heat: 1, lane: 6 });
    }

    #[test]
    fn test_reseed_untimed_keeps_insertion_order() {
        let seats = reseed(1, vec![(7, None), (2, None), (5, None)]);
        let order: Vec<i32> = seats.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![2, 5, 7]);
    }

    #[test]
    fn test_reseed_is_idempotent() {
        let roster = vec![
            (10, Some("01:02:03")),
            (11, None),
            (12, Some("00:59:99")),
            (13, Some("bogus")),
        ];
        let first = reseed(1, roster.clone());
        let second = reseed(1, roster);
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_free_skips_manually_taken_seat() {
        let taken = BTreeSet::from([allocate(0), allocate(1)]);
        assert_eq!(next_free(&taken), allocate(2));

        let moved = BTreeSet::from([allocate(0), allocate(2)]);
        assert_eq!(next_free(&moved), allocate(3));
    }

    #[test]
    fn test_verify_capacity_rejects_lane_clash() {
        let result = verify_capacity(
            9,
            vec![HeatLane { heat: 1, lane: 4 }, HeatLane { heat: 1, lane: 4 }],
        );
        assert!(matches!(
            result,
            Err(MeetError::CapacityInvariantViolation { event_id: 9, heat: 1, .. })
        ));
    }

    #[test]
    fn test_verify_capacity_rejects_unknown_lane() {
        assert!(verify_capacity(1, vec![HeatLane { heat: 1, lane: 9 }]).is_err());
        assert!(verify_capacity(1, vec![HeatLane { heat: 0, lane: 4 }]).is_err());
    }
}
