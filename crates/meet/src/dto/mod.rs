pub mod audit;
pub mod club;
pub mod entry;
pub mod event;
pub mod results;
pub mod swimmer;
