use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::config::ScoringConfig;
use crate::dto::swimmer::{CreateSwimmerRequest, RegistrationResponse, UpdateSwimmerRequest};
use crate::error::Result;
use crate::models::Club;
use crate::repository::MeetStore;
use crate::repository::swimmer::NewSwimmer;

use super::{entries, validation};

/// Registers a swimmer under their club (created on first use) and enters
/// them in each requested event. Relay events put the swimmer on the club
/// team.
pub fn register_swimmer(
    store: &mut MeetStore,
    config: &ScoringConfig,
    req: &CreateSwimmerRequest,
) -> Result<RegistrationResponse> {
    let club = store.get_or_create_club(&req.club)?;
    let swimmer = store.insert_swimmer(NewSwimmer {
        name: req.name.trim().to_string(),
        date_of_birth: req.date_of_birth,
        age_group: req.age_group,
        gender: req.gender,
        club_id: club.club_id,
        federation_id: req.federation_id.clone(),
    })?;
    info!(
        swimmer_id = swimmer.swimmer_id,
        club = %club.name,
        "Registered swimmer"
    );

    enter_events(store, config, swimmer.swimmer_id, club, &req.event_ids)
}

/// Applies new swimmer details.
///
/// A changed age group or gender puts the swimmer in another cohort with a
/// different set of events, so the swimmer is removed (with all entries) and
/// registered again under the same club with `event_ids`. The swimmer gets
/// a new id in that case.
pub fn update_swimmer(
    store: &mut MeetStore,
    config: &ScoringConfig,
    swimmer_id: i32,
    req: &UpdateSwimmerRequest,
) -> Result<RegistrationResponse> {
    let existing = store.find_swimmer(swimmer_id)?.clone();

    if existing.age_group != req.age_group || existing.gender != req.gender {
        let club = store.find_club(existing.club_id)?.name.clone();
        entries::remove_swimmer(store, swimmer_id)?;
        info!(swimmer_id, "Cohort changed, re-registering swimmer");

        return register_swimmer(
            store,
            config,
            &CreateSwimmerRequest {
                name: req.name.clone(),
                date_of_birth: req.date_of_birth,
                age_group: req.age_group,
                gender: req.gender,
                club,
                federation_id: req.federation_id.clone(),
                event_ids: req.event_ids.clone(),
            },
        );
    }

    let swimmer = store.update_swimmer_details(
        swimmer_id,
        req.name.trim().to_string(),
        req.date_of_birth,
        req.federation_id.clone(),
    )?;
    let club = store.find_club(swimmer.club_id)?.clone();

    let new_events: Vec<i32> = req
        .event_ids
        .iter()
        .copied()
        .filter(|event_id| {
            store.find_individual_entry_for(swimmer_id, *event_id).is_none()
                && store
                    .find_relay_entry_for(club.club_id, *event_id)
                    .is_none_or(|r| !r.roster.contains(&swimmer_id))
        })
        .collect();

    enter_events(store, config, swimmer_id, club, &new_events)
}

pub fn create_club(store: &mut MeetStore, name: &str) -> Result<Club> {
    let club = store.get_or_create_club(name)?;
    info!(club_id = club.club_id, name = %club.name, "Club ready");
    Ok(club)
}

fn enter_events(
    store: &mut MeetStore,
    config: &ScoringConfig,
    swimmer_id: i32,
    club: Club,
    event_ids: &[i32],
) -> Result<RegistrationResponse> {
    let mut seen = BTreeSet::new();
    for &event_id in event_ids.iter().filter(|id| seen.insert(**id)) {
        if store.find_event(event_id)?.relay {
            entries::add_relay_entry(store, club.club_id, event_id, swimmer_id)?;
        } else {
            entries::add_individual_entry(store, swimmer_id, event_id)?;
        }
    }

    let mut warnings = Vec::new();
    if let Some(violation) = validation::check_event_cap(store, config, swimmer_id)? {
        warnings.push(violation.message());
    }

    let swimmer = store.find_swimmer(swimmer_id)?.clone();
    let entries: Vec<_> = store
        .individual_entries_for_swimmer(swimmer_id)
        .into_iter()
        .cloned()
        .collect();

    for entry in &entries {
        let teammates: Vec<String> = store
            .individual_entries_for_event(entry.event_id)
            .into_iter()
            .filter(|other| other.swimmer_id != swimmer_id)
            .filter_map(|other| store.find_swimmer(other.swimmer_id).ok())
            .filter(|other| other.club_id == club.club_id)
            .map(|other| other.name.clone())
            .collect();
        if !teammates.is_empty() {
            let message = format!(
                "{} shares event {} with club mates: {}",
                swimmer.name,
                entry.event_id,
                teammates.join(", ")
            );
            warn!("{}", message);
            warnings.push(message);
        }
    }

    let relay_entries = store
        .relay_entries_for_swimmer(swimmer_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(RegistrationResponse {
        swimmer,
        club,
        entries,
        relay_entries,
        warnings,
    })
}
