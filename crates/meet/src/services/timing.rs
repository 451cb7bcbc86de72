use tracing::info;

use crate::dto::entry::{FinalTimeUpdate, TimeUpdate};
use crate::error::{MeetError, Result};
use crate::models::{EntryRef, FinalEntry, RaceTime};
use crate::repository::MeetStore;

/// Stores a batch of heat and relay times. Each time is validated and
/// normalised; one invalid time rejects the whole batch.
pub fn record_times(store: &mut MeetStore, updates: &[TimeUpdate]) -> Result<usize> {
    for update in updates {
        let recorded = RaceTime::parse(&update.time)?.to_recorded();

        match update.entry {
            EntryRef::Individual(id) => store.set_individual_time(id, recorded.clone())?,
            EntryRef::Relay(id) => store.relay_entry_mut(id)?.time = recorded.clone(),
            EntryRef::Final(id) => store.set_final_time(id, recorded.clone())?,
        }
        info!(entry = ?update.entry, time = ?recorded, "Recorded time");
    }
    Ok(updates.len())
}

/// Stores final-round times. The final-round row of a swimmer is created on
/// the first time submitted for them.
pub fn record_final_times(
    store: &mut MeetStore,
    updates: &[FinalTimeUpdate],
) -> Result<Vec<FinalEntry>> {
    let mut recorded_finals = Vec::with_capacity(updates.len());

    for update in updates {
        let entry = store.find_individual_entry(update.entry_id)?;
        let (swimmer_id, event_id) = (entry.swimmer_id, entry.event_id);

        let event = store.find_event(event_id)?;
        if !event.is_final_round() {
            return Err(MeetError::ConstraintViolation(format!(
                "Event '{}' has no final round",
                event.name
            )));
        }

        let recorded = RaceTime::parse(&update.time)?.to_recorded();
        let existing = store
            .find_final_entry_for(swimmer_id, event_id)
            .map(|f| f.final_id);

        let final_entry = match existing {
            Some(final_id) => {
                store.set_final_time(final_id, recorded)?;
                store
                    .final_entries
                    .get(final_id)
                    .cloned()
                    .ok_or(MeetError::not_found("Final entry", final_id))?
            }
            None => {
                info!(swimmer_id, event_id, "Creating final-round entry");
                store.insert_final_entry(swimmer_id, event_id, recorded)
            }
        };
        recorded_finals.push(final_entry);
    }

    Ok(recorded_finals)
}
