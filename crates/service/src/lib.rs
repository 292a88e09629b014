//! Service layer for the activities roster.
//! - Owns the in-memory roster and its signup/unregister rules.
//! - Reuses the typed records and seed data from the `models` crate.
//! - Exposes a `RosterStore` trait so handlers never touch the map directly.

pub mod errors;
pub mod runtime;
pub mod roster;
