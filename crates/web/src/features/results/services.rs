use meet::{
    Database, ScoringConfig,
    dto::{audit::EntryAuditReport, results::ResultsResponse},
    error::Result,
    services::{scoring, validation},
};

/// Run a full scoring pass over the recorded times
pub fn compute_results(db: &Database, config: &ScoringConfig) -> Result<ResultsResponse> {
    db.transaction(|store| scoring::compute_results(store, config))
}

pub fn audit_entries(db: &Database, config: &ScoringConfig) -> EntryAuditReport {
    let report = db.read(|store| validation::audit_entries(store, config));
    report.log_warnings();
    report
}
