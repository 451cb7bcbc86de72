pub mod clubs;
pub mod entries;
pub mod events;
pub mod results;
pub mod swimmers;
pub mod times;
