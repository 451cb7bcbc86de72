use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A seat in the pool: heat number (from 1) and lane number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub struct HeatLane {
    pub heat: u32,
    pub lane: u8,
}

/// A swimmer's seat in an individual event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndividualEntry {
    pub entry_id: i32,
    pub swimmer_id: i32,
    pub event_id: i32,
    pub heat: u32,
    pub lane: u8,
    /// Heat time as recorded, `mm:ss:cc`.
    pub time: Option<String>,
    pub medal: Option<String>,
}

/// Final-round time for a swimmer who swam the preliminary heats.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinalEntry {
    pub final_id: i32,
    pub swimmer_id: i32,
    pub event_id: i32,
    pub time: Option<String>,
    pub medal: Option<String>,
}

/// A club's team in a relay event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayEntry {
    pub relay_id: i32,
    pub club_id: i32,
    pub event_id: i32,
    pub heat: u32,
    pub lane: u8,
    pub time: Option<String>,
    pub medal: Option<String>,
    /// Swimmer ids in the order they were added to the team.
    pub roster: Vec<i32>,
}

/// Addresses one row of any of the three entry tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntryRef {
    Individual(i32),
    Relay(i32),
    Final(i32),
}

impl EntryRef {
    pub fn id(&self) -> i32 {
        match self {
            Self::Individual(id) | Self::Relay(id) | Self::Final(id) => *id,
        }
    }
}

/// Who receives the points a scored entry earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsOwner {
    /// Points go to the swimmer's cohort tally and to the swimmer's club.
    Swimmer(i32),
    Club(i32),
}

/// Shared view over entries the results pass can rank.
pub trait Scoreable {
    fn entry_ref(&self) -> EntryRef;
    fn recorded_time(&self) -> Option<&str>;
    fn points_owner(&self) -> PointsOwner;
    fn set_medal(&mut self, medal: Option<String>);
}

impl IndividualEntry {
    pub fn slot(&self) -> HeatLane {
        HeatLane {
            heat: self.heat,
            lane: self.lane,
        }
    }
}

impl RelayEntry {
    pub fn slot(&self) -> HeatLane {
        HeatLane {
            heat: self.heat,
            lane: self.lane,
        }
    }
}

impl Scoreable for IndividualEntry {
    fn entry_ref(&self) -> EntryRef {
        EntryRef::Individual(self.entry_id)
    }

    fn recorded_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    fn points_owner(&self) -> PointsOwner {
        PointsOwner::Swimmer(self.swimmer_id)
    }

    fn set_medal(&mut self, medal: Option<String>) {
        self.medal = medal;
    }
}

impl Scoreable for FinalEntry {
    fn entry_ref(&self) -> EntryRef {
        EntryRef::Final(self.final_id)
    }

    fn recorded_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    fn points_owner(&self) -> PointsOwner {
        PointsOwner::Swimmer(self.swimmer_id)
    }

    fn set_medal(&mut self, medal: Option<String>) {
        self.medal = medal;
    }
}

impl Scoreable for RelayEntry {
    fn entry_ref(&self) -> EntryRef {
        EntryRef::Relay(self.relay_id)
    }

    fn recorded_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    fn points_owner(&self) -> PointsOwner {
        PointsOwner::Club(self.club_id)
    }

    fn set_medal(&mut self, medal: Option<String>) {
        self.medal = medal;
    }
}
