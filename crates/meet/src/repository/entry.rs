use crate::error::{MeetError, Result};
use crate::models::{FinalEntry, HeatLane, IndividualEntry};

use super::MeetStore;

impl MeetStore {
    pub fn find_individual_entry(&self, id: i32) -> Result<&IndividualEntry> {
        self.individual_entries
            .get(id)
            .ok_or(MeetError::not_found("Entry", id))
    }

    pub fn find_individual_entry_for(
        &self,
        swimmer_id: i32,
        event_id: i32,
    ) -> Option<&IndividualEntry> {
        self.individual_entries
            .values()
            .find(|e| e.swimmer_id == swimmer_id && e.event_id == event_id)
    }

    /// Entries of an event in insertion order.
    pub fn individual_entries_for_event(&self, event_id: i32) -> Vec<&IndividualEntry> {
        self.individual_entries
            .values()
            .filter(|e| e.event_id == event_id)
            .collect()
    }

    pub fn individual_entries_for_swimmer(&self, swimmer_id: i32) -> Vec<&IndividualEntry> {
        self.individual_entries
            .values()
            .filter(|e| e.swimmer_id == swimmer_id)
            .collect()
    }

    pub fn count_individual_entries(&self, event_id: i32) -> usize {
        self.individual_entries
            .values()
            .filter(|e| e.event_id == event_id)
            .count()
    }

    pub(crate) fn insert_individual_entry(
        &mut self,
        swimmer_id: i32,
        event_id: i32,
        slot: HeatLane,
    ) -> IndividualEntry {
        self.individual_entries
            .insert_with(|entry_id| IndividualEntry {
                entry_id,
                swimmer_id,
                event_id,
                heat: slot.heat,
                lane: slot.lane,
                time: None,
                medal: None,
            })
            .clone()
    }

    pub(crate) fn delete_individual_entry(&mut self, id: i32) -> Result<IndividualEntry> {
        self.individual_entries
            .remove(id)
            .ok_or(MeetError::not_found("Entry", id))
    }

    pub(crate) fn set_individual_slot(&mut self, id: i32, slot: HeatLane) -> Result<()> {
        let entry = self
            .individual_entries
            .get_mut(id)
            .ok_or(MeetError::not_found("Entry", id))?;
        entry.heat = slot.heat;
        entry.lane = slot.lane;
        Ok(())
    }

    pub(crate) fn set_individual_time(&mut self, id: i32, time: Option<String>) -> Result<()> {
        let entry = self
            .individual_entries
            .get_mut(id)
            .ok_or(MeetError::not_found("Entry", id))?;
        entry.time = time;
        Ok(())
    }

    pub fn find_final_entry_for(&self, swimmer_id: i32, event_id: i32) -> Option<&FinalEntry> {
        self.final_entries
            .values()
            .find(|f| f.swimmer_id == swimmer_id && f.event_id == event_id)
    }

    pub fn final_entries_for_event(&self, event_id: i32) -> Vec<&FinalEntry> {
        self.final_entries
            .values()
            .filter(|f| f.event_id == event_id)
            .collect()
    }

    pub(crate) fn insert_final_entry(
        &mut self,
        swimmer_id: i32,
        event_id: i32,
        time: Option<String>,
    ) -> FinalEntry {
        self.final_entries
            .insert_with(|final_id| FinalEntry {
                final_id,
                swimmer_id,
                event_id,
                time,
                medal: None,
            })
            .clone()
    }

    pub(crate) fn set_final_time(&mut self, id: i32, time: Option<String>) -> Result<()> {
        let entry = self
            .final_entries
            .get_mut(id)
            .ok_or(MeetError::not_found("Final entry", id))?;
        entry.time = time;
        Ok(())
    }

    pub(crate) fn delete_final_entry(&mut self, id: i32) -> Result<FinalEntry> {
        self.final_entries
            .remove(id)
            .ok_or(MeetError::not_found("Final entry", id))
    }

    /// Drops final-round rows of a swimmer, for one event or all of them.
    pub(crate) fn delete_final_entries_for(&mut self, swimmer_id: i32, event_id: Option<i32>) {
        self.final_entries.retain(|f| {
            f.swimmer_id != swimmer_id || event_id.is_some_and(|id| f.event_id != id)
        });
    }
}
