use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetError {
    #[error("{0}")]
    DuplicateEntry(String),

    #[error("{entity} {id} not found")]
    EntryNotFound { entity: &'static str, id: i32 },

    #[error("Invalid time format: '{0}'")]
    InvalidTimeFormat(String),

    #[error("Heat {heat} of event {event_id} breaks lane capacity: {details}")]
    CapacityInvariantViolation {
        event_id: i32,
        heat: u32,
        details: String,
    },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MeetError>;

impl MeetError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::EntryNotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MeetError::EntryNotFound { .. })
    }

    /// Errors the caller caused by submitting conflicting data, as opposed to
    /// broken internal state.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            MeetError::DuplicateEntry(_) | MeetError::ConstraintViolation(_)
        )
    }
}
