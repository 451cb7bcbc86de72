use crate::dto::event::CreateEventRequest;
use crate::error::{MeetError, Result};
use crate::models::Event;

use super::MeetStore;

impl MeetStore {
    pub fn find_event(&self, id: i32) -> Result<&Event> {
        self.events.get(id).ok_or(MeetError::not_found("Event", id))
    }

    pub fn list_events(&self) -> Vec<&Event> {
        self.events.values().collect()
    }

    /// Events are unique by (name, age group, gender).
    pub fn create_event(&mut self, req: &CreateEventRequest) -> Result<Event> {
        let name = req.name.trim();
        let exists = self.events.values().any(|event| {
            event.name.eq_ignore_ascii_case(name)
                && event.age_group == req.age_group
                && event.gender == req.gender
        });
        if exists {
            return Err(MeetError::ConstraintViolation(format!(
                "Event '{}' already exists for age group {} ({})",
                name, req.age_group, req.gender
            )));
        }

        let event = self.events.insert_with(|event_id| Event {
            event_id,
            name: name.to_string(),
            age_group: req.age_group,
            gender: req.gender,
            scoring_mode: req.scoring_mode,
            relay: req.relay,
        });
        Ok(event.clone())
    }
}
