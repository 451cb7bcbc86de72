use meet::{
    Database, ScoringConfig,
    dto::entry::{
        AddIndividualEntryRequest, AddRelayEntryRequest, AssignLaneRequest,
        IndividualEntryResponse, RelayEntryResponse,
    },
    error::Result,
    models::{EntryRef, HeatLane},
    services::{entries, validation},
};

/// Enter a swimmer in an individual event, reporting a cap overrun as a warning
pub fn add_individual_entry(
    db: &Database,
    config: &ScoringConfig,
    request: &AddIndividualEntryRequest,
) -> Result<IndividualEntryResponse> {
    db.transaction(|store| {
        let entry = entries::add_individual_entry(store, request.swimmer_id, request.event_id)?;
        let warnings = validation::check_event_cap(store, config, request.swimmer_id)?
            .map(|violation| violation.message())
            .into_iter()
            .collect();
        Ok(IndividualEntryResponse { entry, warnings })
    })
}

pub fn add_relay_entry(db: &Database, request: &AddRelayEntryRequest) -> Result<RelayEntryResponse> {
    db.transaction(|store| {
        let entry = entries::add_relay_entry(
            store,
            request.club_id,
            request.event_id,
            request.swimmer_id,
        )?;
        Ok(RelayEntryResponse { entry })
    })
}

pub fn remove_entry(db: &Database, entry: EntryRef) -> Result<()> {
    db.transaction(|store| entries::remove_entry(store, entry))
}

pub fn assign_lane(db: &Database, request: &AssignLaneRequest) -> Result<()> {
    db.transaction(|store| {
        entries::assign_lane(
            store,
            request.entry,
            HeatLane {
                heat: request.heat,
                lane: request.lane,
            },
        )
    })
}
