//! Date labels for the five participation slots.
//!
//! # Responsibility
//! - Turn the padded five-slot history view into one label per slot,
//!   without any GUI dependency.
//!
//! # Invariants
//! - Absent slots produce empty labels.
//! - When two present slots share the same `MM-dd` text, every present
//!   label gains a two-digit year on a second line to disambiguate.

use crate::model::participation::{ParticipationRecord, HISTORY_CAP};
use std::collections::HashMap;

/// Formats the label text per slot for a padded five-slot list.
pub fn participation_labels(
    slots: &[Option<ParticipationRecord>; HISTORY_CAP],
) -> [String; HISTORY_CAP] {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for record in slots.iter().flatten() {
        *counts.entry(month_day(record)).or_insert(0) += 1;
    }
    let ambiguous = counts.values().any(|&count| count > 1);

    std::array::from_fn(|i| match &slots[i] {
        None => String::new(),
        Some(record) => {
            let md = month_day(record);
            if ambiguous {
                format!("{md}\n{}", record.date.format("%y"))
            } else {
                md
            }
        }
    })
}

fn month_day(record: &ParticipationRecord) -> String {
    record.date.format("%m-%d").to_string()
}
