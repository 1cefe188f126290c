use chrono::NaiveDate;
use rollcall_core::{Description, Reminder, ReminderError, ReminderList, ReminderValidationError};

fn due(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn description_rejects_blank_input() {
    assert_eq!(
        Description::new("").unwrap_err(),
        ReminderValidationError::EmptyDescription
    );
    assert_eq!(
        Description::new("   ").unwrap_err(),
        ReminderValidationError::EmptyDescription
    );
}

#[test]
fn description_requires_a_letter_or_digit() {
    assert_eq!(
        Description::new("!@#$%^&*-_+=(){}[]|/,.?<>:;`~").unwrap_err(),
        ReminderValidationError::NoLetterOrDigit
    );
    assert!(Description::new("a+").is_ok());
    assert!(Description::new("1+").is_ok());
}

#[test]
fn description_caps_at_200_characters() {
    let exactly_200 = "x".repeat(200);
    assert!(Description::new(exactly_200).is_ok());

    let too_long = "x".repeat(201);
    assert_eq!(
        Description::new(too_long).unwrap_err(),
        ReminderValidationError::DescriptionTooLong { chars: 201 }
    );
}

#[test]
fn description_identity_ignores_case_and_trims() {
    let lower = Description::new("valid desc").unwrap();
    let upper = Description::new("VALID DESC").unwrap();
    let padded = Description::new("  valid desc  ").unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower, padded);
    assert_ne!(lower, Description::new("diff desc").unwrap());
    assert_eq!(lower.to_string(), "valid desc");
}

#[test]
fn list_rejects_duplicates_and_missing_removals() {
    let mut list = ReminderList::new();
    let submit = Reminder::new(Description::new("submit report").unwrap(), due("2025-11-02"));

    list.add(submit.clone()).unwrap();
    assert_eq!(list.add(submit.clone()).unwrap_err(), ReminderError::Duplicate);

    list.remove(&submit).unwrap();
    assert_eq!(list.remove(&submit).unwrap_err(), ReminderError::NotFound);
    assert!(list.is_empty());
}

#[test]
fn set_reminder_replaces_and_guards_against_collisions() {
    let mut list = ReminderList::new();
    let first = Reminder::new(Description::new("first").unwrap(), due("2025-11-01"));
    let second = Reminder::new(Description::new("second").unwrap(), due("2025-11-02"));
    list.add(first.clone()).unwrap();
    list.add(second.clone()).unwrap();

    // Editing first onto second's identity collides.
    let err = list.set_reminder(&first, second.clone()).unwrap_err();
    assert_eq!(err, ReminderError::Duplicate);

    // Editing a reminder onto itself is allowed.
    list.set_reminder(&second, second.clone()).unwrap();

    let edited = Reminder::new(Description::new("first amended").unwrap(), due("2025-11-03"));
    list.set_reminder(&first, edited.clone()).unwrap();
    assert!(list.contains(&edited));
    assert!(!list.contains(&first));
}

#[test]
fn bulk_replace_rejects_duplicate_input() {
    let mut list = ReminderList::new();
    let a = Reminder::new(Description::new("same thing").unwrap(), due("2025-11-01"));
    let b = Reminder::new(Description::new("SAME THING").unwrap(), due("2025-11-01"));

    let err = list.set_reminders(vec![a.clone(), b]).unwrap_err();
    assert_eq!(err, ReminderError::Duplicate);
    assert!(list.is_empty());

    list.set_reminders(vec![a]).unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn sorted_view_orders_by_due_date_then_description() {
    let mut list = ReminderList::new();
    list.add(Reminder::new(Description::new("beta").unwrap(), due("2025-11-02")))
        .unwrap();
    list.add(Reminder::new(Description::new("alpha").unwrap(), due("2025-11-02")))
        .unwrap();
    list.add(Reminder::new(Description::new("zulu").unwrap(), due("2025-11-01")))
        .unwrap();

    let sorted: Vec<_> = list
        .sorted()
        .into_iter()
        .map(|r| r.description.as_str().to_string())
        .collect();
    assert_eq!(sorted, vec!["zulu", "alpha", "beta"]);

    // Insertion order is preserved underneath.
    assert_eq!(list.as_slice()[0].description.as_str(), "beta");
}
