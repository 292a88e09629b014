//! Typed domain records for the activities roster.

pub mod errors;
pub mod activity;
pub mod roster;
pub mod seed;

pub use activity::ActivityRecord;
pub use roster::Roster;
