pub mod allocation;
pub mod entries;
pub mod listing;
pub mod registration;
pub mod scoring;
pub mod timing;
pub mod validation;
