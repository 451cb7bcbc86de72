use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{EntryRef, IndividualEntry, RelayEntry};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddIndividualEntryRequest {
    pub swimmer_id: i32,
    pub event_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddRelayEntryRequest {
    pub club_id: i32,
    pub event_id: i32,
    pub swimmer_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignLaneRequest {
    pub entry: EntryRef,

    #[validate(range(min = 1))]
    pub heat: u32,

    #[validate(range(min = 1, max = 8))]
    pub lane: u8,
}

/// A heat time for an individual or relay entry. `""` or `"::"` clears it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeUpdate {
    pub entry: EntryRef,
    pub time: String,
}

/// A final-round time, addressed by the swimmer's preliminary entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinalTimeUpdate {
    pub entry_id: i32,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndividualEntryResponse {
    pub entry: IndividualEntry,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayEntryResponse {
    pub entry: RelayEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimesRecordedResponse {
    pub updated: usize,
}
