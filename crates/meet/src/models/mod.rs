pub mod club;
pub mod entry;
pub mod event;
pub mod race_time;
pub mod swimmer;

pub use club::Club;
pub use entry::{EntryRef, FinalEntry, HeatLane, IndividualEntry, PointsOwner, RelayEntry, Scoreable};
pub use event::{Event, ScoringMode};
pub use race_time::{ABSENT_SENTINEL, DID_NOT_FINISH_SENTINEL, RaceTime};
pub use swimmer::{AgeGroup, Gender, Swimmer};
