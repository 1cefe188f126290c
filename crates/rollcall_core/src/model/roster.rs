//! Roster aggregate: persons, groups and reminders under one root.
//!
//! # Responsibility
//! - Own all application data and enforce cross-entity rules.
//! - Reject duplicate persons (by same-person identity) and duplicate
//!   reminders.
//!
//! # Invariants
//! - No two persons in the roster are the same person.
//! - Group member sets only reference IDs of persons in the roster;
//!   removing a person scrubs their memberships.

use crate::model::group::{Group, GroupName};
use crate::model::person::{Person, PersonId};
use crate::model::reminder::{Reminder, ReminderError, ReminderList};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Failures raised by roster mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    DuplicatePerson,
    PersonNotFound(PersonId),
    DuplicateGroup(GroupName),
    GroupNotFound(GroupName),
    DuplicateReminder,
    ReminderNotFound,
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "person already exists in the roster"),
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
            Self::DuplicateGroup(name) => write!(f, "group \"{name}\" already exists"),
            Self::GroupNotFound(name) => write!(f, "group \"{name}\" not found"),
            Self::DuplicateReminder => write!(f, "reminder already exists in the roster"),
            Self::ReminderNotFound => write!(f, "reminder not found in the roster"),
        }
    }
}

impl Error for RosterError {}

impl From<ReminderError> for RosterError {
    fn from(value: ReminderError) -> Self {
        match value {
            ReminderError::Duplicate => Self::DuplicateReminder,
            ReminderError::NotFound => Self::ReminderNotFound,
        }
    }
}

/// Top-level aggregate wrapping all contact-management data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    persons: Vec<Person>,
    groups: BTreeMap<GroupName, BTreeSet<PersonId>>,
    reminders: ReminderList,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // person operations

    /// Returns true if a person with the same identity exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Adds a person.
    ///
    /// # Errors
    /// - [`RosterError::DuplicatePerson`] when a same-identity person exists.
    pub fn add_person(&mut self, person: Person) -> RosterResult<()> {
        if self.has_person(&person) {
            return Err(RosterError::DuplicatePerson);
        }
        info!(
            "event=person_added module=roster status=ok id={}",
            person.id
        );
        self.persons.push(person);
        Ok(())
    }

    /// Replaces the person holding `target` with `edited`.
    ///
    /// When `edited` carries a different ID, group memberships follow it:
    /// every member set holding `target` is rewritten to the new ID, so no
    /// set ever references an ID outside the roster.
    ///
    /// # Errors
    /// - [`RosterError::PersonNotFound`] when `target` is absent.
    /// - [`RosterError::DuplicatePerson`] when `edited` collides with a
    ///   different existing person, by identity or by ID.
    pub fn set_person(&mut self, target: PersonId, edited: Person) -> RosterResult<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.id == target)
            .ok_or(RosterError::PersonNotFound(target))?;

        let collides = self
            .persons
            .iter()
            .any(|p| p.id != target && p.is_same_person(&edited));
        if collides {
            return Err(RosterError::DuplicatePerson);
        }

        if edited.id != target {
            if self.persons.iter().any(|p| p.id == edited.id) {
                return Err(RosterError::DuplicatePerson);
            }
            for members in self.groups.values_mut() {
                if members.remove(&target) {
                    members.insert(edited.id);
                }
            }
        }

        self.persons[index] = edited;
        Ok(())
    }

    /// Removes a person and scrubs their group memberships.
    ///
    /// # Errors
    /// - [`RosterError::PersonNotFound`] when the ID is absent.
    pub fn remove_person(&mut self, id: PersonId) -> RosterResult<Person> {
        let index = self
            .persons
            .iter()
            .position(|p| p.id == id)
            .ok_or(RosterError::PersonNotFound(id))?;

        for members in self.groups.values_mut() {
            members.remove(&id);
        }
        info!("event=person_removed module=roster status=ok id={id}");
        Ok(self.persons.remove(index))
    }

    /// Looks up one person by ID.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Persons in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Records (or replaces) participation for `date` on one person.
    ///
    /// # Errors
    /// - [`RosterError::PersonNotFound`] when the ID is absent.
    pub fn record_participation(
        &mut self,
        id: PersonId,
        date: NaiveDate,
        score: i32,
    ) -> RosterResult<()> {
        let person = self
            .persons
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RosterError::PersonNotFound(id))?;
        person.record_participation(date, score);
        Ok(())
    }

    // group operations

    /// Returns true if the named group exists.
    pub fn has_group(&self, name: &GroupName) -> bool {
        self.groups.contains_key(name)
    }

    /// Creates an empty group.
    ///
    /// # Errors
    /// - [`RosterError::DuplicateGroup`] when the name is taken.
    pub fn create_group(&mut self, name: GroupName) -> RosterResult<()> {
        if self.has_group(&name) {
            return Err(RosterError::DuplicateGroup(name));
        }
        self.groups.insert(name, BTreeSet::new());
        Ok(())
    }

    /// Deletes a group, leaving its former members in the roster.
    ///
    /// # Errors
    /// - [`RosterError::GroupNotFound`] when the name is absent.
    pub fn remove_group(&mut self, name: &GroupName) -> RosterResult<()> {
        self.groups
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RosterError::GroupNotFound(name.clone()))
    }

    /// All groups as materialized views, ordered by name.
    pub fn groups(&self) -> Vec<Group> {
        self.groups
            .iter()
            .map(|(name, members)| Group {
                name: name.clone(),
                members: members.clone(),
            })
            .collect()
    }

    /// Names of the groups a person belongs to.
    pub fn groups_of(&self, id: PersonId) -> BTreeSet<GroupName> {
        self.groups
            .iter()
            .filter(|(_, members)| members.contains(&id))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Adds roster members to a group.
    ///
    /// IDs already in the group are left as members; the call is not an
    /// error for them.
    ///
    /// # Errors
    /// - [`RosterError::GroupNotFound`] when the group is absent.
    /// - [`RosterError::PersonNotFound`] when an ID is not in the roster.
    pub fn add_to_group(&mut self, name: &GroupName, ids: &[PersonId]) -> RosterResult<()> {
        for &id in ids {
            if self.person(id).is_none() {
                return Err(RosterError::PersonNotFound(id));
            }
        }
        let members = self
            .groups
            .get_mut(name)
            .ok_or_else(|| RosterError::GroupNotFound(name.clone()))?;
        members.extend(ids.iter().copied());
        Ok(())
    }

    /// Removes members from a group. IDs not in the group are ignored.
    ///
    /// # Errors
    /// - [`RosterError::GroupNotFound`] when the group is absent.
    pub fn remove_from_group(&mut self, name: &GroupName, ids: &[PersonId]) -> RosterResult<()> {
        let members = self
            .groups
            .get_mut(name)
            .ok_or_else(|| RosterError::GroupNotFound(name.clone()))?;
        for id in ids {
            members.remove(id);
        }
        Ok(())
    }

    // reminder operations

    /// Returns true if an equal reminder exists.
    pub fn has_reminder(&self, reminder: &Reminder) -> bool {
        self.reminders.contains(reminder)
    }

    pub fn add_reminder(&mut self, reminder: Reminder) -> RosterResult<()> {
        self.reminders.add(reminder).map_err(RosterError::from)
    }

    pub fn set_reminder(&mut self, target: &Reminder, edited: Reminder) -> RosterResult<()> {
        self.reminders
            .set_reminder(target, edited)
            .map_err(RosterError::from)
    }

    pub fn remove_reminder(&mut self, reminder: &Reminder) -> RosterResult<()> {
        self.reminders.remove(reminder).map_err(RosterError::from)
    }

    /// Reminders sorted by due date ascending.
    pub fn reminders(&self) -> Vec<Reminder> {
        self.reminders.sorted()
    }

    // whole-roster operations

    /// Replaces all data with a copy of `other`.
    pub fn reset_data(&mut self, other: &Roster) {
        info!(
            "event=roster_reset module=roster status=ok persons={} groups={} reminders={}",
            other.persons.len(),
            other.groups.len(),
            other.reminders.len()
        );
        *self = other.clone();
    }

    /// Merges `other` into this roster.
    ///
    /// Persons and reminders already present (by identity) are skipped
    /// rather than rejected; groups are left untouched.
    pub fn merge(&mut self, other: &Roster) {
        let mut skipped = 0usize;
        for person in &other.persons {
            if self.has_person(person) {
                skipped += 1;
            } else {
                self.persons.push(person.clone());
            }
        }
        for reminder in other.reminders.as_slice() {
            if !self.reminders.contains(reminder) {
                // Duplicate is unreachable after the contains check.
                let _ = self.reminders.add(reminder.clone());
            }
        }
        info!(
            "event=roster_merged module=roster status=ok skipped_persons={skipped} persons={}",
            self.persons.len()
        );
    }
}
