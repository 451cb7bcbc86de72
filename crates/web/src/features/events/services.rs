use meet::{
    Database,
    dto::{
        event::{CreateEventRequest, EventParticipants, EventSummary, ParticipantDetail},
        swimmer::SwimmerInfo,
    },
    error::Result,
    models::Event,
    services::{entries, listing},
};
use tracing::info;

/// List events with their participant counts
pub fn list_events(db: &Database) -> Vec<EventSummary> {
    db.read(listing::event_summaries)
}

pub fn create_event(db: &Database, request: &CreateEventRequest) -> Result<Event> {
    let event = db.transaction(|store| store.create_event(request))?;
    info!(event_id = event.event_id, name = %event.name, "Created event");
    Ok(event)
}

pub fn get_participants(db: &Database, event_id: i32) -> Result<EventParticipants> {
    db.read(|store| listing::event_participants(store, event_id))
}

pub fn get_eligible(db: &Database, event_id: i32) -> Result<Vec<SwimmerInfo>> {
    db.read(|store| listing::eligible_swimmers(store, event_id))
}

pub fn get_top(db: &Database, event_id: i32) -> Result<Vec<ParticipantDetail>> {
    db.read(|store| listing::top_participants(store, event_id))
}

/// Re-seed an event and return its new seating
pub fn recalculate(db: &Database, event_id: i32) -> Result<EventParticipants> {
    db.transaction(|store| {
        entries::recalculate_heats_lanes(store, event_id)?;
        listing::event_participants(store, event_id)
    })
}
