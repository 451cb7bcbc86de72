use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{AgeGroup, Event, Gender, ScoringMode};

use super::swimmer::{SwimmerInfo, validate_age_group};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_age_group"))]
    pub age_group: AgeGroup,

    pub gender: Gender,

    #[serde(default)]
    pub scoring_mode: ScoringMode,

    #[serde(default)]
    pub relay: bool,
}

/// Event with its current entrant count (clubs for relays, swimmers otherwise).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventSummary {
    #[serde(flatten)]
    pub event: Event,
    pub participant_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDetail {
    pub entry_id: i32,
    pub heat: u32,
    pub lane: u8,
    pub time: Option<String>,
    pub medal: Option<String>,
    pub swimmer: SwimmerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayParticipantDetail {
    pub relay_id: i32,
    pub heat: u32,
    pub lane: u8,
    pub time: Option<String>,
    pub medal: Option<String>,
    pub club_id: i32,
    pub club_name: String,
    pub swimmers: Vec<String>,
}

/// Seated entrants of one event, in heat then lane order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "participants", rename_all = "lowercase")]
pub enum EventParticipants {
    Individual(Vec<ParticipantDetail>),
    Relay(Vec<RelayParticipantDetail>),
}

impl EventParticipants {
    pub fn len(&self) -> usize {
        match self {
            Self::Individual(rows) => rows.len(),
            Self::Relay(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
