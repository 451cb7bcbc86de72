use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::models::AgeGroup;

/// A swimmer entered in more individual events than their age group allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CapViolation {
    pub swimmer_id: i32,
    pub swimmer_name: String,
    pub club_name: String,
    pub age_group: AgeGroup,
    pub entries: usize,
    pub cap: usize,
}

/// More than one swimmer of the same club in one individual event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClubDuplicate {
    pub event_id: i32,
    pub event_name: String,
    pub club_id: i32,
    pub club_name: String,
    pub swimmers: Vec<String>,
}

/// Advisory entry findings. Nothing in here blocks an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EntryAuditReport {
    pub cap_violations: Vec<CapViolation>,
    pub club_duplicates: Vec<ClubDuplicate>,
}

impl CapViolation {
    pub fn message(&self) -> String {
        format!(
            "{} ({}) is entered in {} individual events, age group {} allows {}",
            self.swimmer_name, self.club_name, self.entries, self.age_group, self.cap
        )
    }
}

impl ClubDuplicate {
    pub fn message(&self) -> String {
        format!(
            "{} has {} swimmers in '{}': {}",
            self.club_name,
            self.swimmers.len(),
            self.event_name,
            self.swimmers.join(", ")
        )
    }
}

impl EntryAuditReport {
    pub fn is_clean(&self) -> bool {
        self.cap_violations.is_empty() && self.club_duplicates.is_empty()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.cap_violations
            .iter()
            .map(CapViolation::message)
            .chain(self.club_duplicates.iter().map(ClubDuplicate::message))
            .collect()
    }

    pub fn log_warnings(&self) {
        for warning in self.warnings() {
            warn!("{}", warning);
        }
    }
}
