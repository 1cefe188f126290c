//! Bounded participation history per person.
//!
//! # Responsibility
//! - Keep the five most recent participation records, one per calendar date.
//! - Serve ordered views for display (oldest -> newest, rightmost newest).
//!
//! # Invariants
//! - At most [`HISTORY_CAP`] entries at all times.
//! - No two entries share a date; ordering is by date only, never by
//!   insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of records a history retains.
pub const HISTORY_CAP: usize = 5;

/// One day's participation: a date and the score earned on that date.
///
/// Identity for storage purposes is the date alone; the score is payload
/// carried per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationRecord {
    pub date: NaiveDate,
    pub score: i32,
}

impl ParticipationRecord {
    pub fn new(date: NaiveDate, score: i32) -> Self {
        Self { date, score }
    }
}

/// Up to five most recent participation records, ordered by date.
///
/// Adding a record whose date already exists replaces the score for that
/// date. When a sixth unique date arrives, the oldest date is dropped.
/// All views run oldest -> newest so the UI can render left to right with
/// the newest entry rightmost.
///
/// Serialized as a plain list of records; the cap and uniqueness rules are
/// re-applied on deserialization, so an over-long or duplicated wire value
/// collapses to a valid history instead of bypassing the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ParticipationRecord>", into = "Vec<ParticipationRecord>")]
pub struct ParticipationHistory {
    by_date: BTreeMap<NaiveDate, ParticipationRecord>,
}

impl ParticipationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history by applying [`ParticipationHistory::add`] to each
    /// record in iteration order.
    ///
    /// Later same-date records override earlier ones, and only the five
    /// chronologically latest unique dates survive, regardless of the
    /// order the input arrives in.
    pub fn from_records(records: impl IntoIterator<Item = ParticipationRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.add(record);
        }
        history
    }

    /// Adds or replaces a record.
    ///
    /// If the date already exists its score is replaced in place. If the
    /// cap is exceeded afterwards, the oldest date is dropped; with the
    /// invariant held on every call a single add evicts at most once.
    pub fn add(&mut self, record: ParticipationRecord) {
        self.by_date.insert(record.date, record);

        while self.by_date.len() > HISTORY_CAP {
            self.by_date.pop_first();
        }
    }

    /// Convenience wrapper over [`ParticipationHistory::add`].
    pub fn add_score(&mut self, date: NaiveDate, score: i32) {
        self.add(ParticipationRecord::new(date, score));
    }

    /// Returns all records oldest -> newest. Length 0..=5.
    pub fn as_list(&self) -> Vec<ParticipationRecord> {
        self.by_date.values().copied().collect()
    }

    /// Returns exactly five slots with real entries right-aligned.
    ///
    /// Missing slots are `None` on the oldest (left) side, so the newest
    /// record always lands in the last slot when the history is non-empty.
    pub fn as_padded_five(&self) -> [Option<ParticipationRecord>; HISTORY_CAP] {
        let mut slots = [None; HISTORY_CAP];
        let missing = HISTORY_CAP - self.by_date.len();
        for (slot, record) in slots.iter_mut().skip(missing).zip(self.by_date.values()) {
            *slot = Some(*record);
        }
        slots
    }

    /// Returns the record with the greatest date, if any.
    pub fn most_recent(&self) -> Option<&ParticipationRecord> {
        self.by_date.values().next_back()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl From<Vec<ParticipationRecord>> for ParticipationHistory {
    fn from(records: Vec<ParticipationRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<ParticipationHistory> for Vec<ParticipationRecord> {
    fn from(history: ParticipationHistory) -> Self {
        history.as_list()
    }
}

impl FromIterator<ParticipationRecord> for ParticipationHistory {
    fn from_iter<I: IntoIterator<Item = ParticipationRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
