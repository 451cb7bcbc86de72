use crate::error::{MeetError, Result};
use crate::models::{HeatLane, RelayEntry};

use super::MeetStore;

impl MeetStore {
    pub fn find_relay_entry(&self, id: i32) -> Result<&RelayEntry> {
        self.relay_entries
            .get(id)
            .ok_or(MeetError::not_found("Relay entry", id))
    }

    pub fn find_relay_entry_for(&self, club_id: i32, event_id: i32) -> Option<&RelayEntry> {
        self.relay_entries
            .values()
            .find(|r| r.club_id == club_id && r.event_id == event_id)
    }

    pub fn relay_entries_for_event(&self, event_id: i32) -> Vec<&RelayEntry> {
        self.relay_entries
            .values()
            .filter(|r| r.event_id == event_id)
            .collect()
    }

    pub fn relay_entries_for_swimmer(&self, swimmer_id: i32) -> Vec<&RelayEntry> {
        self.relay_entries
            .values()
            .filter(|r| r.roster.contains(&swimmer_id))
            .collect()
    }

    /// Number of distinct clubs entered in a relay event.
    pub fn count_relay_clubs(&self, event_id: i32) -> usize {
        let mut clubs: Vec<i32> = self
            .relay_entries
            .values()
            .filter(|r| r.event_id == event_id)
            .map(|r| r.club_id)
            .collect();
        clubs.sort_unstable();
        clubs.dedup();
        clubs.len()
    }

    pub(crate) fn insert_relay_entry(
        &mut self,
        club_id: i32,
        event_id: i32,
        slot: HeatLane,
    ) -> RelayEntry {
        self.relay_entries
            .insert_with(|relay_id| RelayEntry {
                relay_id,
                club_id,
                event_id,
                heat: slot.heat,
                lane: slot.lane,
                time: None,
                medal: None,
                roster: Vec::new(),
            })
            .clone()
    }

    pub(crate) fn relay_entry_mut(&mut self, id: i32) -> Result<&mut RelayEntry> {
        self.relay_entries
            .get_mut(id)
            .ok_or(MeetError::not_found("Relay entry", id))
    }

    pub(crate) fn delete_relay_entry(&mut self, id: i32) -> Result<RelayEntry> {
        self.relay_entries
            .remove(id)
            .ok_or(MeetError::not_found("Relay entry", id))
    }
}
