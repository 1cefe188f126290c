//! Domain model for the contact roster.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Enforce value-type validity at construction time.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - Person/group/description identity is case-insensitive; display
//!   preserves original casing.

pub mod group;
pub mod participation;
pub mod person;
pub mod reminder;
pub mod roster;
