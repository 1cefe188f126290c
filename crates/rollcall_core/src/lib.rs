//! Core domain logic for rollcall.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::group::{Group, GroupName, GroupValidationError};
pub use model::participation::{ParticipationHistory, ParticipationRecord, HISTORY_CAP};
pub use model::person::{Name, Person, PersonId, PersonValidationError};
pub use model::reminder::{
    Description, Reminder, ReminderError, ReminderList, ReminderValidationError,
};
pub use model::roster::{Roster, RosterError, RosterResult};
pub use service::membership::{add_members, remove_members, MembershipError, MembershipReport};
pub use view::labels::participation_labels;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
