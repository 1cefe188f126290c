use rollcall_core::{
    add_members, remove_members, GroupName, MembershipError, Name, Person, PersonId, Roster,
};

/// Roster with Alex, Bernice and Charlotte; returns the displayed order.
fn seeded_roster() -> (Roster, Vec<PersonId>) {
    let mut roster = Roster::new();
    let mut shown = Vec::new();
    for name in ["Alex Yeoh", "Bernice Yu", "Charlotte Oliveiro"] {
        let person = Person::new(Name::new(name).unwrap());
        shown.push(person.id);
        roster.add_person(person).unwrap();
    }
    (roster, shown)
}

fn group(name: &str) -> GroupName {
    GroupName::new(name).unwrap()
}

fn member_positions(roster: &Roster, name: &GroupName, shown: &[PersonId]) -> Vec<usize> {
    shown
        .iter()
        .enumerate()
        .filter(|(_, id)| roster.groups_of(**id).contains(name))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn add_then_remove_updates_membership() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    let report = add_members(&mut roster, &shown, &g, &[1, 3]).unwrap();
    assert_eq!(report.summary(), "Added 2 member(s) to Group A");
    assert_eq!(member_positions(&roster, &g, &shown), vec![0, 2]);

    let report = remove_members(&mut roster, &shown, &g, &[3]).unwrap();
    assert_eq!(report.summary(), "Removed 1 member(s) from Group A");
    assert_eq!(member_positions(&roster, &g, &shown), vec![0]);
}

#[test]
fn remove_from_empty_group_reports_no_changes() {
    let (mut roster, shown) = seeded_roster();
    let g = group("-");
    roster.create_group(g.clone()).unwrap();

    let report = remove_members(&mut roster, &shown, &g, &[3]).unwrap();
    assert_eq!(
        report.summary(),
        "No changes: no members were removed from -.\n\
         Not in group (skipped): Charlotte Oliveiro"
    );
    assert!(member_positions(&roster, &g, &shown).is_empty());
}

#[test]
fn duplicate_indices_are_reported_and_applied_once() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Dupes");
    roster.create_group(g.clone()).unwrap();

    add_members(&mut roster, &shown, &g, &[2]).unwrap();
    assert_eq!(member_positions(&roster, &g, &shown), vec![1]);

    let report = remove_members(&mut roster, &shown, &g, &[2, 2, 2]).unwrap();
    assert_eq!(
        report.summary(),
        "Removed 1 member(s) from Dupes\n\
         Skipped duplicate indices: i/2, i/2"
    );
    assert!(member_positions(&roster, &g, &shown).is_empty());
}

#[test]
fn missing_group_is_an_error() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Nope");

    let err = remove_members(&mut roster, &shown, &g, &[1]).unwrap_err();
    assert_eq!(err, MembershipError::GroupNotFound(g.clone()));

    let err = add_members(&mut roster, &shown, &g, &[1]).unwrap_err();
    assert_eq!(err, MembershipError::GroupNotFound(g));
}

#[test]
fn remove_rejects_out_of_range_index() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    let err = remove_members(&mut roster, &shown, &g, &[9]).unwrap_err();
    assert_eq!(err, MembershipError::IndexOutOfRange(9));
}

#[test]
fn add_reports_out_of_range_indices_without_failing() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    let report = add_members(&mut roster, &shown, &g, &[1, 9]).unwrap();
    assert_eq!(
        report.summary(),
        "Added 1 member(s) to Group A\n\
         Invalid indices (out of range): i/9"
    );
    assert_eq!(member_positions(&roster, &g, &shown), vec![0]);
}

#[test]
fn add_reports_existing_members_as_unchanged() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    add_members(&mut roster, &shown, &g, &[1]).unwrap();

    let report = add_members(&mut roster, &shown, &g, &[1, 2]).unwrap();
    assert_eq!(
        report.summary(),
        "Added 1 member(s) to Group A\n\
         Already in group (unchanged): Alex Yeoh"
    );
    assert_eq!(member_positions(&roster, &g, &shown), vec![0, 1]);
}

#[test]
fn add_with_only_known_members_reports_no_changes() {
    let (mut roster, shown) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    add_members(&mut roster, &shown, &g, &[2]).unwrap();

    let report = add_members(&mut roster, &shown, &g, &[2]).unwrap();
    assert_eq!(
        report.summary(),
        "No changes: no new members were added to Group A.\n\
         Already in group (unchanged): Bernice Yu"
    );
}

#[test]
fn empty_displayed_list_is_an_error() {
    let (mut roster, _) = seeded_roster();
    let g = group("Group A");
    roster.create_group(g.clone()).unwrap();

    let err = add_members(&mut roster, &[], &g, &[1]).unwrap_err();
    assert_eq!(err, MembershipError::NothingDisplayed);
}
