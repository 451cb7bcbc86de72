//! In-memory entity arena.
//!
//! Every entity lives in an id-keyed [`Table`]; relations are plain id
//! columns on the join rows (individual, final and relay entries). Lookups
//! by relation go through the query methods each submodule adds to
//! [`MeetStore`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MeetError, Result};
use crate::models::{
    Club, EntryRef, Event, FinalEntry, IndividualEntry, RelayEntry, Scoreable, Swimmer,
};

pub mod club;
pub mod entry;
pub mod event;
pub mod relay;
pub mod swimmer;

/// An id-keyed table with its own id sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Reserves the next id and stores the row built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Rows in id (insertion) order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.rows.retain(|_, row| keep(row));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All meet data. Cloned by [`crate::Database::transaction`] so a failed
/// operation leaves the committed state untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetStore {
    pub(crate) swimmers: Table<Swimmer>,
    pub(crate) clubs: Table<Club>,
    pub(crate) events: Table<Event>,
    pub(crate) individual_entries: Table<IndividualEntry>,
    pub(crate) final_entries: Table<FinalEntry>,
    pub(crate) relay_entries: Table<RelayEntry>,
}

impl MeetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn scoreable_mut(&mut self, entry: EntryRef) -> Result<&mut dyn Scoreable> {
        let row: Option<&mut dyn Scoreable> = match entry {
            EntryRef::Individual(id) => self
                .individual_entries
                .get_mut(id)
                .map(|e| e as &mut dyn Scoreable),
            EntryRef::Relay(id) => self
                .relay_entries
                .get_mut(id)
                .map(|e| e as &mut dyn Scoreable),
            EntryRef::Final(id) => self
                .final_entries
                .get_mut(id)
                .map(|e| e as &mut dyn Scoreable),
        };
        row.ok_or(MeetError::not_found("Entry", entry.id()))
    }

    /// Clears every medal in every entry table.
    pub(crate) fn clear_medals(&mut self) {
        for entry in self.individual_entries.values_mut() {
            entry.set_medal(None);
        }
        for entry in self.final_entries.values_mut() {
            entry.set_medal(None);
        }
        for entry in self.relay_entries.values_mut() {
            entry.set_medal(None);
        }
    }
}
