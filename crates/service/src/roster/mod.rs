//! Activity roster: the store trait and its in-memory implementation.

pub mod store;
pub mod memory;

pub use memory::InMemoryRoster;
pub use store::{RosterChange, RosterStore};
