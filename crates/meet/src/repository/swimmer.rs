use chrono::NaiveDate;

use crate::dto::swimmer::SwimmerFilter;
use crate::error::{MeetError, Result};
use crate::models::{AgeGroup, Gender, Swimmer};

use super::MeetStore;

/// Column values for a swimmer row that does not exist yet.
#[derive(Debug, Clone)]
pub struct NewSwimmer {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub club_id: i32,
    pub federation_id: Option<String>,
}

impl MeetStore {
    pub fn find_swimmer(&self, id: i32) -> Result<&Swimmer> {
        self.swimmers
            .get(id)
            .ok_or(MeetError::not_found("Swimmer", id))
    }

    pub fn list_swimmers(&self, filter: &SwimmerFilter) -> Vec<&Swimmer> {
        let name = filter.name.as_deref().map(str::to_lowercase);

        self.swimmers
            .values()
            .filter(|s| {
                name.as_deref()
                    .is_none_or(|needle| s.name.to_lowercase().contains(needle))
            })
            .filter(|s| filter.age_group.is_none_or(|ag| s.age_group == ag))
            .filter(|s| filter.gender.is_none_or(|g| s.gender == g))
            .filter(|s| filter.club_id.is_none_or(|c| s.club_id == c))
            .collect()
    }

    pub fn insert_swimmer(&mut self, new: NewSwimmer) -> Result<Swimmer> {
        self.find_club(new.club_id)?;

        let swimmer = self.swimmers.insert_with(|swimmer_id| Swimmer {
            swimmer_id,
            name: new.name,
            date_of_birth: new.date_of_birth,
            age_group: new.age_group,
            gender: new.gender,
            club_id: new.club_id,
            federation_id: new.federation_id,
        });
        Ok(swimmer.clone())
    }

    /// Overwrites the descriptive columns of a swimmer. Cohort changes go
    /// through re-registration instead, see
    /// [`crate::services::registration::update_swimmer`].
    pub fn update_swimmer_details(
        &mut self,
        id: i32,
        name: String,
        date_of_birth: NaiveDate,
        federation_id: Option<String>,
    ) -> Result<Swimmer> {
        let swimmer = self
            .swimmers
            .get_mut(id)
            .ok_or(MeetError::not_found("Swimmer", id))?;
        swimmer.name = name;
        swimmer.date_of_birth = date_of_birth;
        swimmer.federation_id = federation_id;
        Ok(swimmer.clone())
    }

    pub(crate) fn delete_swimmer_row(&mut self, id: i32) -> Result<Swimmer> {
        self.swimmers
            .remove(id)
            .ok_or(MeetError::not_found("Swimmer", id))
    }
}
