use meet::{
    Database,
    dto::club::CreateClubRequest,
    error::Result,
    models::Club,
    services::registration,
};

pub fn list_clubs(db: &Database) -> Vec<Club> {
    db.read(|store| store.list_clubs().into_iter().cloned().collect())
}

/// Get or create a club by name
pub fn create_club(db: &Database, request: &CreateClubRequest) -> Result<Club> {
    db.transaction(|store| registration::create_club(store, &request.name))
}
