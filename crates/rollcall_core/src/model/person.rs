//! Person domain model.
//!
//! # Responsibility
//! - Define the person aggregate tracked by the roster.
//! - Validate the name value type at construction.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - Two persons are the *same* person when their names match
//!   case-insensitively; full equality compares every field.

use crate::model::participation::ParticipationHistory;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a person.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

const NAME_MAX_CHARS: usize = 100;

// Names start with a letter or digit and otherwise allow spaces, so
// "Charlotte Oliveiro" passes while "" and " " do not.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("hard-coded pattern must compile")
});

/// Validation failures for person value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name is empty, whitespace-only, or contains disallowed characters.
    InvalidName(String),
    NameTooLong { chars: usize },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names must start with a letter or digit \
                 and contain only letters, digits and spaces"
            ),
            Self::NameTooLong { chars } => write!(
                f,
                "name is {chars} characters long; at most {NAME_MAX_CHARS} allowed"
            ),
        }
    }
}

impl Error for PersonValidationError {}

/// Validated person name. Trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validates and constructs a name.
    ///
    /// # Errors
    /// - [`PersonValidationError::InvalidName`] when the trimmed input is
    ///   empty or contains characters outside letters/digits/spaces.
    /// - [`PersonValidationError::NameTooLong`] past 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let trimmed = value.into().trim().to_string();
        if !NAME_PATTERN.is_match(&trimmed) {
            return Err(PersonValidationError::InvalidName(trimmed));
        }
        let chars = trimmed.chars().count();
        if chars > NAME_MAX_CHARS {
            return Err(PersonValidationError::NameTooLong { chars });
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A tracked contact with optional reachability fields and a bounded
/// participation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID used for group membership and display ordering.
    pub id: PersonId,
    pub name: Name,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub participation: ParticipationHistory,
}

impl Person {
    /// Creates a person with a generated stable ID and empty history.
    pub fn new(name: Name) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a person with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: PersonId, name: Name) -> Self {
        Self {
            id,
            name,
            phone: None,
            email: None,
            participation: ParticipationHistory::new(),
        }
    }

    /// Returns true when `other` refers to the same person.
    ///
    /// Identity is the name compared case-insensitively; weaker than full
    /// equality, which also compares contact fields and history.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }

    /// Records (or replaces) participation for `date` on this person.
    pub fn record_participation(&mut self, date: NaiveDate, score: i32) {
        self.participation.add_score(date, score);
    }
}
