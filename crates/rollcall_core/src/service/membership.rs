//! Group membership use-cases with duplicate/validity reporting.
//!
//! # Responsibility
//! - Apply bulk add/remove of displayed persons to a group.
//! - Report exactly what happened: who changed, which indices were
//!   duplicated or invalid, who was already (or not) a member.
//!
//! # Invariants
//! - Indices are 1-based positions into the caller's displayed order.
//! - The first occurrence of an index wins; repeats are reported, never
//!   applied twice.
//! - Adding tolerates out-of-range indices (reported, skipped); removing
//!   treats them as a hard error.

use crate::model::group::GroupName;
use crate::model::person::PersonId;
use crate::model::roster::{Roster, RosterError};
use log::info;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures that abort a membership operation before any change is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    GroupNotFound(GroupName),
    /// The displayed person list is empty, so no index can be valid.
    NothingDisplayed,
    /// Remove only: a 1-based index outside the displayed list.
    IndexOutOfRange(usize),
    Roster(RosterError),
}

impl Display for MembershipError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound(name) => write!(f, "group \"{name}\" not found"),
            Self::NothingDisplayed => write!(f, "no persons are currently displayed"),
            Self::IndexOutOfRange(index) => {
                write!(f, "index i/{index} is outside the displayed list")
            }
            Self::Roster(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MembershipError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Roster(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RosterError> for MembershipError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MembershipAction {
    Add,
    Remove,
}

/// Truthful account of one bulk membership operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipReport {
    action: MembershipAction,
    group: GroupName,
    /// Names actually added to / removed from the group, displayed order.
    pub changed: Vec<String>,
    /// One `i/N` token per repeated occurrence of an index.
    pub duplicate_tokens: Vec<String>,
    /// Add: names already in the group. Remove: names not in the group.
    pub unchanged: Vec<String>,
    /// Add only: `i/N` tokens for out-of-range indices.
    pub invalid_tokens: Vec<String>,
}

impl MembershipReport {
    fn new(action: MembershipAction, group: GroupName) -> Self {
        Self {
            action,
            group,
            changed: Vec::new(),
            duplicate_tokens: Vec::new(),
            unchanged: Vec::new(),
            invalid_tokens: Vec::new(),
        }
    }

    /// Renders the multi-line user-facing summary.
    ///
    /// The first line states the applied change (or that nothing changed);
    /// further lines list skipped duplicates, unchanged members and
    /// invalid indices, in that order, only when non-empty.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        match self.action {
            MembershipAction::Add if !self.changed.is_empty() => lines.push(format!(
                "Added {} member(s) to {}",
                self.changed.len(),
                self.group
            )),
            MembershipAction::Add => lines.push(format!(
                "No changes: no new members were added to {}.",
                self.group
            )),
            MembershipAction::Remove if !self.changed.is_empty() => lines.push(format!(
                "Removed {} member(s) from {}",
                self.changed.len(),
                self.group
            )),
            MembershipAction::Remove => lines.push(format!(
                "No changes: no members were removed from {}.",
                self.group
            )),
        }

        if !self.duplicate_tokens.is_empty() {
            lines.push(format!(
                "Skipped duplicate indices: {}",
                self.duplicate_tokens.join(", ")
            ));
        }
        if !self.unchanged.is_empty() {
            match self.action {
                MembershipAction::Add => lines.push(format!(
                    "Already in group (unchanged): {}",
                    self.unchanged.join(", ")
                )),
                MembershipAction::Remove => lines.push(format!(
                    "Not in group (skipped): {}",
                    self.unchanged.join(", ")
                )),
            }
        }
        if !self.invalid_tokens.is_empty() {
            lines.push(format!(
                "Invalid indices (out of range): {}",
                self.invalid_tokens.join(", ")
            ));
        }

        lines.join("\n")
    }
}

/// Adds displayed persons to a group.
///
/// `shown` is the displayed order; `indices` are 1-based positions into
/// it. Out-of-range indices are skipped and reported, matching the
/// tolerant add behavior.
///
/// # Errors
/// - [`MembershipError::GroupNotFound`] when the group is absent.
/// - [`MembershipError::NothingDisplayed`] when `shown` is empty.
pub fn add_members(
    roster: &mut Roster,
    shown: &[PersonId],
    group: &GroupName,
    indices: &[usize],
) -> Result<MembershipReport, MembershipError> {
    if !roster.has_group(group) {
        return Err(MembershipError::GroupNotFound(group.clone()));
    }
    if shown.is_empty() {
        return Err(MembershipError::NothingDisplayed);
    }

    let mut report = MembershipReport::new(MembershipAction::Add, group.clone());
    let mut seen = BTreeSet::new();
    let mut targets = Vec::new();

    for &index in indices {
        if !seen.insert(index) {
            report.duplicate_tokens.push(format!("i/{index}"));
            continue;
        }
        if index == 0 || index > shown.len() {
            report.invalid_tokens.push(format!("i/{index}"));
            continue;
        }
        targets.push(shown[index - 1]);
    }

    let mut to_add = Vec::new();
    for id in targets {
        let name = display_name(roster, id).ok_or(RosterError::PersonNotFound(id))?;
        if roster.groups_of(id).contains(group) {
            report.unchanged.push(name);
        } else {
            to_add.push(id);
            report.changed.push(name);
        }
    }

    if !to_add.is_empty() {
        roster.add_to_group(group, &to_add)?;
    }

    info!(
        "event=group_add module=membership status=ok group={} added={} duplicates={} invalid={}",
        group,
        report.changed.len(),
        report.duplicate_tokens.len(),
        report.invalid_tokens.len()
    );
    Ok(report)
}

/// Removes displayed persons from a group.
///
/// Same pipeline as [`add_members`], except an out-of-range index aborts
/// the whole operation instead of being reported.
///
/// # Errors
/// - [`MembershipError::GroupNotFound`] when the group is absent.
/// - [`MembershipError::NothingDisplayed`] when `shown` is empty.
/// - [`MembershipError::IndexOutOfRange`] for any index outside `shown`.
pub fn remove_members(
    roster: &mut Roster,
    shown: &[PersonId],
    group: &GroupName,
    indices: &[usize],
) -> Result<MembershipReport, MembershipError> {
    if !roster.has_group(group) {
        return Err(MembershipError::GroupNotFound(group.clone()));
    }
    if shown.is_empty() {
        return Err(MembershipError::NothingDisplayed);
    }

    let mut report = MembershipReport::new(MembershipAction::Remove, group.clone());
    let mut seen = BTreeSet::new();
    let mut targets = Vec::new();

    for &index in indices {
        if index == 0 || index > shown.len() {
            return Err(MembershipError::IndexOutOfRange(index));
        }
        if !seen.insert(index) {
            report.duplicate_tokens.push(format!("i/{index}"));
            continue;
        }
        targets.push(shown[index - 1]);
    }

    let mut to_remove = Vec::new();
    for id in targets {
        let name = display_name(roster, id).ok_or(RosterError::PersonNotFound(id))?;
        if roster.groups_of(id).contains(group) {
            to_remove.push(id);
            report.changed.push(name);
        } else {
            report.unchanged.push(name);
        }
    }

    if !to_remove.is_empty() {
        roster.remove_from_group(group, &to_remove)?;
    }

    info!(
        "event=group_remove module=membership status=ok group={} removed={} duplicates={}",
        group,
        report.changed.len(),
        report.duplicate_tokens.len()
    );
    Ok(report)
}

fn display_name(roster: &Roster, id: PersonId) -> Option<String> {
    roster.person(id).map(|p| p.name.as_str().to_string())
}
