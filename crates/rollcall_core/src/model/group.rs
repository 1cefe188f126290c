//! Group domain model.
//!
//! # Responsibility
//! - Validate group names and define case-insensitive group identity.
//! - Represent a group as a named set of person IDs.
//!
//! # Invariants
//! - Group identity (equality, ordering, hashing) folds ASCII case, so
//!   "Group A" and "group a" name the same group.

use crate::model::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

const GROUP_NAME_MAX_CHARS: usize = 50;

/// Validation failures for group value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    NameTooLong { chars: usize },
}

impl Display for GroupValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "group name cannot be empty"),
            Self::NameTooLong { chars } => write!(
                f,
                "group name is {chars} characters long; at most {GROUP_NAME_MAX_CHARS} allowed"
            ),
        }
    }
}

impl Error for GroupValidationError {}

/// Validated group name. Trimmed on construction.
///
/// Display preserves the casing the group was created with; identity does
/// not. Any non-empty text up to 50 characters is allowed, including
/// single-symbol names like "-".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Validates and constructs a group name.
    ///
    /// # Errors
    /// - [`GroupValidationError::EmptyName`] when the trimmed input is empty.
    /// - [`GroupValidationError::NameTooLong`] past 50 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, GroupValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(GroupValidationError::EmptyName);
        }
        let chars = trimmed.chars().count();
        if chars > GROUP_NAME_MAX_CHARS {
            return Err(GroupValidationError::NameTooLong { chars });
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

impl Display for GroupName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for GroupName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for GroupName {}

impl PartialOrd for GroupName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded_bytes().cmp(other.folded_bytes())
    }
}

impl Hash for GroupName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Folded length + bytes keeps Hash consistent with the
        // case-insensitive Eq without allocating.
        self.0.len().hash(state);
        for byte in self.folded_bytes() {
            state.write_u8(byte);
        }
    }
}

impl TryFrom<String> for GroupName {
    type Error = GroupValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

/// A named set of member IDs, used for roster views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: GroupName,
    pub members: BTreeSet<PersonId>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(name: GroupName) -> Self {
        Self {
            name,
            members: BTreeSet::new(),
        }
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
