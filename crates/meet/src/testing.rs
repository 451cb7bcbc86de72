//! Builders for unit tests.

use chrono::NaiveDate;

use crate::dto::event::CreateEventRequest;
use crate::models::{AgeGroup, Gender, ScoringMode};
use crate::repository::MeetStore;
use crate::repository::swimmer::NewSwimmer;
use crate::services::entries;

pub(crate) fn event(store: &mut MeetStore, name: &str) -> i32 {
    event_with(store, name, false, ScoringMode::TimeTrial)
}

pub(crate) fn relay_event(store: &mut MeetStore, name: &str) -> i32 {
    event_with(store, name, true, ScoringMode::TimeTrial)
}

pub(crate) fn final_event(store: &mut MeetStore, name: &str) -> i32 {
    event_with(store, name, false, ScoringMode::FinalRound)
}

fn event_with(store: &mut MeetStore, name: &str, relay: bool, scoring_mode: ScoringMode) -> i32 {
    store
        .create_event(&CreateEventRequest {
            name: name.to_string(),
            age_group: AgeGroup(1),
            gender: Gender::Male,
            scoring_mode,
            relay,
        })
        .unwrap()
        .event_id
}

/// An age group 1 male swimmer of `club` (created if missing).
pub(crate) fn swimmer(store: &mut MeetStore, club: &str, name: &str) -> i32 {
    let club_id = store.get_or_create_club(club).unwrap().club_id;
    store
        .insert_swimmer(NewSwimmer {
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2008, 5, 17).unwrap(),
            age_group: AgeGroup(1),
            gender: Gender::Male,
            club_id,
            federation_id: None,
        })
        .unwrap()
        .swimmer_id
}

pub(crate) fn enter(store: &mut MeetStore, swimmer_id: i32, event_id: i32) -> i32 {
    entries::add_individual_entry(store, swimmer_id, event_id)
        .unwrap()
        .entry_id
}

/// Writes a raw time straight into the row, bypassing validation.
pub(crate) fn set_time(store: &mut MeetStore, entry_id: i32, time: Option<&str>) {
    store
        .set_individual_time(entry_id, time.map(str::to_string))
        .unwrap();
}

pub(crate) fn set_relay_time(store: &mut MeetStore, relay_id: i32, time: Option<&str>) {
    store.relay_entry_mut(relay_id).unwrap().time = time.map(str::to_string);
}
