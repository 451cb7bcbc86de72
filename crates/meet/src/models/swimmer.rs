use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competitor category tier, e.g. 1 = Under 19 ... 4 = Under 11.
///
/// Labels and entry caps per tier come from the scoring configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct AgeGroup(pub u8);

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Swimmer {
    pub swimmer_id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub club_id: i32,
    /// Swimming federation registration number, when the swimmer has one.
    pub federation_id: Option<String>,
}

impl Swimmer {
    /// The (age group, gender) bucket championship points are tallied in.
    pub fn cohort(&self) -> (AgeGroup, Gender) {
        (self.age_group, self.gender)
    }
}
