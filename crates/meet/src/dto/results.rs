use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AgeGroup, EntryRef, Gender, ScoringMode};

use super::swimmer::SwimmerInfo;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultsResponse {
    pub events: Vec<EventResult>,
    pub championship_standings: Vec<CohortStanding>,
    pub club_standings: Vec<ClubStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResult {
    pub event_id: i32,
    pub name: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub relay: bool,
    pub scoring_mode: ScoringMode,
    /// False when the points guard withheld this event's points.
    pub points_awarded: bool,
    pub participants: Vec<RankedParticipant>,
    /// Entries that could not be ranked normally, e.g. unreadable times.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankedParticipant {
    pub entry: EntryRef,
    /// 1-based finishing order.
    pub position: usize,
    pub time: Option<String>,
    pub medal: Option<String>,
    pub points: u32,
    pub club_id: i32,
    pub club_name: String,
    /// Set for individual events.
    pub swimmer: Option<SwimmerInfo>,
    /// Team member names, for relay events.
    pub roster: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CohortStanding {
    pub age_group: AgeGroup,
    pub age_group_label: Option<String>,
    pub gender: Gender,
    pub standings: Vec<SwimmerStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerStanding {
    pub rank: usize,
    pub points: u32,
    pub swimmer: SwimmerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubStanding {
    pub rank: usize,
    pub club_id: i32,
    pub name: String,
    pub total_points: u32,
}
