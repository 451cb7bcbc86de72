use meet::{
    Database, ScoringConfig,
    dto::swimmer::{
        CreateSwimmerRequest, RegistrationResponse, SwimmerDetailResponse, SwimmerFilter,
        SwimmerInfo, UpdateSwimmerRequest,
    },
    error::Result,
    models::Swimmer,
    services::{entries, listing, registration},
};

/// List swimmers matching the filter
pub fn list_swimmers(db: &Database, filter: &SwimmerFilter) -> Vec<SwimmerInfo> {
    db.read(|store| {
        store
            .list_swimmers(filter)
            .into_iter()
            .map(|s| listing::swimmer_info(store, s))
            .collect()
    })
}

/// Get a swimmer with their entries
pub fn get_swimmer(db: &Database, swimmer_id: i32) -> Result<SwimmerDetailResponse> {
    db.read(|store| listing::swimmer_detail(store, swimmer_id))
}

/// Register a swimmer and enter the requested events
pub fn register_swimmer(
    db: &Database,
    config: &ScoringConfig,
    request: &CreateSwimmerRequest,
) -> Result<RegistrationResponse> {
    db.transaction(|store| registration::register_swimmer(store, config, request))
}

pub fn update_swimmer(
    db: &Database,
    config: &ScoringConfig,
    swimmer_id: i32,
    request: &UpdateSwimmerRequest,
) -> Result<RegistrationResponse> {
    db.transaction(|store| registration::update_swimmer(store, config, swimmer_id, request))
}

/// Delete a swimmer and every entry they hold
pub fn delete_swimmer(db: &Database, swimmer_id: i32) -> Result<Swimmer> {
    db.transaction(|store| entries::remove_swimmer(store, swimmer_id))
}
