use crate::error::{MeetError, Result};
use crate::models::Club;

use super::MeetStore;

impl MeetStore {
    pub fn find_club(&self, id: i32) -> Result<&Club> {
        self.clubs.get(id).ok_or(MeetError::not_found("Club", id))
    }

    /// Club names are compared case-insensitively after trimming.
    pub fn find_club_by_name(&self, name: &str) -> Option<&Club> {
        let name = name.trim();
        self.clubs
            .values()
            .find(|club| club.name.eq_ignore_ascii_case(name))
    }

    pub fn list_clubs(&self) -> Vec<&Club> {
        self.clubs.values().collect()
    }

    pub fn create_club(&mut self, name: &str) -> Result<Club> {
        if self.find_club_by_name(name).is_some() {
            return Err(MeetError::ConstraintViolation(format!(
                "Club '{}' already exists",
                name.trim()
            )));
        }

        let name = name.trim().to_string();
        let club = self.clubs.insert_with(|club_id| Club {
            club_id,
            name,
            total_points: 0,
        });
        Ok(club.clone())
    }

    /// Returns the club with this name, creating it with zero points first if
    /// needed.
    pub fn get_or_create_club(&mut self, name: &str) -> Result<Club> {
        match self.find_club_by_name(name) {
            Some(club) => Ok(club.clone()),
            None => self.create_club(name),
        }
    }

    pub fn reset_club_points(&mut self) {
        for club in self.clubs.values_mut() {
            club.total_points = 0;
        }
    }

    pub fn add_club_points(&mut self, id: i32, points: u32) -> Result<()> {
        let club = self
            .clubs
            .get_mut(id)
            .ok_or(MeetError::not_found("Club", id))?;
        club.total_points += points;
        Ok(())
    }
}
