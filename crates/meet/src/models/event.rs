use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AgeGroup, Gender};

/// How an individual event produces its ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Ranked directly on the heat times.
    #[default]
    TimeTrial,
    /// Heats are preliminaries; ranking uses the separately recorded final times.
    FinalRound,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub event_id: i32,
    pub name: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub scoring_mode: ScoringMode,
    pub relay: bool,
}

impl Event {
    pub fn is_final_round(&self) -> bool {
        !self.relay && self.scoring_mode == ScoringMode::FinalRound
    }
}
