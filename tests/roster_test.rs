//! Tests for roster store operations.

use strictly_teams::{AddOutcome, DuplicatePolicy, Pin, Roster, Team};

fn names(roster: &Roster) -> Vec<&str> {
    roster.participants().iter().map(|p| p.name()).collect()
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut roster = Roster::new(DuplicatePolicy::Reject);
    roster.add("Carol");
    roster.add("Alice");
    roster.add("Bob");
    assert_eq!(names(&roster), vec!["Carol", "Alice", "Bob"]);
    assert!(roster.participants().iter().all(|p| p.pin() == Pin::Unpinned));
}

#[test]
fn test_add_trims_name() {
    let mut roster = Roster::new(DuplicatePolicy::Reject);
    assert_eq!(roster.add("  Alice \t"), AddOutcome::Added);
    assert_eq!(names(&roster), vec!["Alice"]);
}

#[test]
fn test_add_whitespace_only_is_noop() {
    let mut roster = Roster::new(DuplicatePolicy::Reject);
    roster.add("Alice");
    let before = roster.clone();
    assert_eq!(roster.add("  "), AddOutcome::Blank);
    assert_eq!(roster.add(""), AddOutcome::Blank);
    assert_eq!(roster, before);
}

#[test]
fn test_duplicate_rejected_by_default() {
    let mut roster = Roster::default();
    roster.add("Alice");
    assert_eq!(roster.add(" Alice "), AddOutcome::Duplicate);
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_duplicates_allowed_act_together() {
    let mut roster = Roster::new(DuplicatePolicy::Allow);
    roster.add("Alice");
    roster.add("Bob");
    assert_eq!(roster.add("Alice"), AddOutcome::Added);
    assert_eq!(roster.len(), 3);

    assert_eq!(roster.set_pin("Alice", Pin::TeamTwo), 2);
    assert_eq!(roster.pinned_to(Team::Two).count(), 2);

    assert_eq!(roster.remove("Alice"), 2);
    assert_eq!(names(&roster), vec!["Bob"]);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut roster = Roster::default();
    roster.add("Alice");
    assert_eq!(roster.remove("Zed"), 0);
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_set_pin_unknown_is_noop() {
    let mut roster = Roster::default();
    roster.add("Alice");
    assert_eq!(roster.set_pin("Zed", Pin::TeamOne), 0);
    assert_eq!(roster.unpinned_count(), 1);
}

#[test]
fn test_set_pin_and_unpin() {
    let mut roster = Roster::default();
    roster.add("Alice");
    roster.add("Bob");
    roster.set_pin("Bob", Pin::TeamOne);
    assert_eq!(roster.get(1).map(|p| p.pin()), Some(Pin::TeamOne));
    assert_eq!(roster.unpinned_count(), 1);

    roster.set_pin("Bob", Pin::Unpinned);
    assert_eq!(roster.unpinned_count(), 2);
}

#[test]
fn test_clear() {
    let mut roster = Roster::default();
    roster.add("Alice");
    roster.add("Bob");
    assert_eq!(roster.clear(), 2);
    assert!(roster.is_empty());
}

#[test]
fn test_pin_parsing() {
    assert_eq!("1".parse::<Pin>().unwrap(), Pin::TeamOne);
    assert_eq!("Team2".parse::<Pin>().unwrap(), Pin::TeamTwo);
    assert_eq!("team_one".parse::<Pin>().unwrap(), Pin::TeamOne);
    assert_eq!("unpinned".parse::<Pin>().unwrap(), Pin::Unpinned);
    assert_eq!("0".parse::<Pin>().unwrap(), Pin::Unpinned);
    assert!("3".parse::<Pin>().is_err());
}

#[test]
fn test_pin_cycle_visits_all() {
    let mut pin = Pin::Unpinned;
    let mut seen = Vec::new();
    for _ in 0..3 {
        pin = pin.cycle();
        seen.push(pin);
    }
    assert_eq!(seen, vec![Pin::TeamOne, Pin::TeamTwo, Pin::Unpinned]);
}
