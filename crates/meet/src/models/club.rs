use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Club {
    pub club_id: i32,
    pub name: String,
    /// Points accumulated by the last results pass. Reset at the start of
    /// every pass.
    pub total_points: u32,
}
