use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{AgeGroup, Club, Gender, IndividualEntry, RelayEntry, Swimmer};

/// Request payload for registering a swimmer, optionally with the events
/// they enter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSwimmerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    #[validate(custom(function = "validate_age_group"))]
    pub age_group: AgeGroup,

    pub gender: Gender,

    /// Club name; the club is created on first use.
    #[validate(length(
        min = 1,
        max = 255,
        message = "Club must be between 1 and 255 characters"
    ))]
    pub club: String,

    #[validate(length(max = 64))]
    pub federation_id: Option<String>,

    /// Individual and relay events to enter, by id.
    #[serde(default)]
    pub event_ids: Vec<i32>,
}

/// Request payload for updating a swimmer. A new age group or gender moves
/// the swimmer to another cohort, which re-registers them with `event_ids`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSwimmerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    #[validate(custom(function = "validate_age_group"))]
    pub age_group: AgeGroup,

    pub gender: Gender,

    #[validate(length(max = 64))]
    pub federation_id: Option<String>,

    #[serde(default)]
    pub event_ids: Vec<i32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SwimmerFilter {
    /// Case-insensitive substring of the swimmer name
    pub name: Option<String>,
    pub age_group: Option<AgeGroup>,
    pub gender: Option<Gender>,
    pub club_id: Option<i32>,
}

/// Swimmer columns with the club name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerInfo {
    pub swimmer_id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub club_id: i32,
    pub club_name: String,
    pub federation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerEventInfo {
    pub entry_id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub heat: u32,
    pub lane: u8,
    pub time: Option<String>,
    pub medal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerRelayInfo {
    pub relay_id: i32,
    pub event_id: i32,
    pub event_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerDetailResponse {
    pub swimmer: SwimmerInfo,
    pub events: Vec<SwimmerEventInfo>,
    pub relay_events: Vec<SwimmerRelayInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub swimmer: Swimmer,
    pub club: Club,
    pub entries: Vec<IndividualEntry>,
    pub relay_entries: Vec<RelayEntry>,
    /// Advisory findings, e.g. an exceeded event cap. Never block registration.
    pub warnings: Vec<String>,
}

pub(crate) fn validate_age_group(age_group: &AgeGroup) -> Result<(), validator::ValidationError> {
    if (1..=9).contains(&age_group.0) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_age_group"))
    }
}
