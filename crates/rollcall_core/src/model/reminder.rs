//! Reminder domain model and uniqueness-enforcing list.
//!
//! # Responsibility
//! - Validate reminder descriptions at construction.
//! - Keep reminders unique and serve them sorted by due date.
//!
//! # Invariants
//! - Descriptions are trimmed, non-empty, contain at least one letter or
//!   digit, and are at most 200 characters.
//! - Description identity folds ASCII case.
//! - The list never holds two equal reminders.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

const DESCRIPTION_MAX_CHARS: usize = 200;

static HAS_LETTER_OR_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Za-z0-9]").expect("hard-coded pattern must compile"));

/// Validation failures for reminder value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    EmptyDescription,
    NoLetterOrDigit,
    DescriptionTooLong { chars: usize },
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description cannot be empty"),
            Self::NoLetterOrDigit => {
                write!(f, "description must contain at least one letter or number")
            }
            Self::DescriptionTooLong { chars } => write!(
                f,
                "description is {chars} characters long; at most {DESCRIPTION_MAX_CHARS} allowed"
            ),
        }
    }
}

impl Error for ReminderValidationError {}

/// List-level failures for reminder mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    Duplicate,
    NotFound,
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => write!(f, "reminder already exists"),
            Self::NotFound => write!(f, "reminder not found"),
        }
    }
}

impl Error for ReminderError {}

/// Validated reminder description. Trimmed on construction; identity is
/// case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validates and constructs a description.
    ///
    /// # Errors
    /// - [`ReminderValidationError::EmptyDescription`] for blank input.
    /// - [`ReminderValidationError::NoLetterOrDigit`] when nothing
    ///   alphanumeric is present.
    /// - [`ReminderValidationError::DescriptionTooLong`] past 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ReminderValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ReminderValidationError::EmptyDescription);
        }
        if !HAS_LETTER_OR_DIGIT.is_match(&trimmed) {
            return Err(ReminderValidationError::NoLetterOrDigit);
        }
        let chars = trimmed.chars().count();
        if chars > DESCRIPTION_MAX_CHARS {
            return Err(ReminderValidationError::DescriptionTooLong { chars });
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for Description {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Description {}

impl PartialOrd for Description {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Description {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded_bytes().cmp(other.folded_bytes())
    }
}

impl Hash for Description {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Folded length + bytes keeps Hash consistent with the
        // case-insensitive Eq without allocating.
        self.0.len().hash(state);
        for byte in self.folded_bytes() {
            state.write_u8(byte);
        }
    }
}

impl TryFrom<String> for Description {
    type Error = ReminderValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

/// A dated reminder. Orders by due date first, then description.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Reminder {
    pub due: NaiveDate,
    pub description: Description,
}

impl Reminder {
    pub fn new(description: Description, due: NaiveDate) -> Self {
        Self { due, description }
    }
}

impl Display for Reminder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (due {})", self.description, self.due)
    }
}

/// A list of reminders that enforces uniqueness between its elements.
///
/// Insertion order is preserved internally; [`ReminderList::sorted`] serves
/// the upcoming-first view the UI binds to. Deserialization goes through
/// the same duplicate rejection as [`ReminderList::set_reminders`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Reminder>", into = "Vec<Reminder>")]
pub struct ReminderList {
    items: Vec<Reminder>,
}

impl ReminderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an equal reminder is already present.
    pub fn contains(&self, reminder: &Reminder) -> bool {
        self.items.iter().any(|existing| existing == reminder)
    }

    /// Adds a reminder.
    ///
    /// # Errors
    /// - [`ReminderError::Duplicate`] when an equal reminder exists.
    pub fn add(&mut self, reminder: Reminder) -> Result<(), ReminderError> {
        if self.contains(&reminder) {
            return Err(ReminderError::Duplicate);
        }
        self.items.push(reminder);
        Ok(())
    }

    /// Replaces `target` with `edited`.
    ///
    /// # Errors
    /// - [`ReminderError::NotFound`] when `target` is absent.
    /// - [`ReminderError::Duplicate`] when `edited` differs from `target`
    ///   but collides with another existing reminder.
    pub fn set_reminder(&mut self, target: &Reminder, edited: Reminder) -> Result<(), ReminderError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or(ReminderError::NotFound)?;

        if target != &edited && self.contains(&edited) {
            return Err(ReminderError::Duplicate);
        }

        self.items[index] = edited;
        Ok(())
    }

    /// Removes the equal reminder.
    ///
    /// # Errors
    /// - [`ReminderError::NotFound`] when no equal reminder exists.
    pub fn remove(&mut self, reminder: &Reminder) -> Result<(), ReminderError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing == reminder)
            .ok_or(ReminderError::NotFound)?;
        self.items.remove(index);
        Ok(())
    }

    /// Replaces the whole contents.
    ///
    /// # Errors
    /// - [`ReminderError::Duplicate`] when the input contains two equal
    ///   reminders.
    pub fn set_reminders(&mut self, reminders: Vec<Reminder>) -> Result<(), ReminderError> {
        for (i, a) in reminders.iter().enumerate() {
            if reminders[i + 1..].iter().any(|b| a == b) {
                return Err(ReminderError::Duplicate);
            }
        }
        self.items = reminders;
        Ok(())
    }

    /// Returns reminders sorted by due date ascending, then description.
    pub fn sorted(&self) -> Vec<Reminder> {
        let mut sorted = self.items.clone();
        sorted.sort();
        sorted
    }

    /// Returns reminders in insertion order.
    pub fn as_slice(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Reminder>> for ReminderList {
    type Error = ReminderError;

    fn try_from(reminders: Vec<Reminder>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.set_reminders(reminders)?;
        Ok(list)
    }
}

impl From<ReminderList> for Vec<Reminder> {
    fn from(list: ReminderList) -> Self {
        list.items
    }
}
