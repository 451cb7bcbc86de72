use std::sync::Arc;

use meet::{Database, ScoringConfig};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub scoring: Arc<ScoringConfig>,
}

impl AppState {
    pub fn new(db: Database, scoring: ScoringConfig) -> Self {
        Self {
            db: Arc::new(db),
            scoring: Arc::new(scoring),
        }
    }
}
