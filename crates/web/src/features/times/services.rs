use meet::{
    Database,
    dto::entry::{FinalTimeUpdate, TimeUpdate},
    error::Result,
    models::FinalEntry,
    services::timing,
};

pub fn record_times(db: &Database, updates: &[TimeUpdate]) -> Result<usize> {
    db.transaction(|store| timing::record_times(store, updates))
}

pub fn record_final_times(db: &Database, updates: &[FinalTimeUpdate]) -> Result<Vec<FinalEntry>> {
    db.transaction(|store| timing::record_final_times(store, updates))
}
