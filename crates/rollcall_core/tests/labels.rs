use chrono::NaiveDate;
use rollcall_core::{participation_labels, ParticipationRecord};

fn record(date: &str, score: i32) -> Option<ParticipationRecord> {
    Some(ParticipationRecord::new(date.parse::<NaiveDate>().unwrap(), score))
}

#[test]
fn non_ambiguous_slots_get_single_line_labels() {
    let slots = [
        record("2025-09-10", 2),
        record("2025-09-11", 3),
        None,
        None,
        record("2025-10-05", 1),
    ];

    let labels = participation_labels(&slots);
    assert_eq!(labels[0], "09-10");
    assert_eq!(labels[1], "09-11");
    assert_eq!(labels[2], "");
    assert_eq!(labels[3], "");
    assert_eq!(labels[4], "10-05");
}

#[test]
fn repeated_month_day_adds_year_to_every_present_label() {
    let slots = [
        record("2024-10-31", 1),
        record("2025-10-31", 1),
        record("2025-07-25", 3),
        None,
        None,
    ];

    let labels = participation_labels(&slots);
    assert_eq!(labels[0], "10-31\n24");
    assert_eq!(labels[1], "10-31\n25");
    // Even unambiguous dates pick up the year once any clash exists.
    assert_eq!(labels[2], "07-25\n25");
    assert_eq!(labels[3], "");
    assert_eq!(labels[4], "");
}

#[test]
fn all_absent_slots_produce_empty_labels() {
    let labels = participation_labels(&[None; 5]);
    assert!(labels.iter().all(String::is_empty));
}
