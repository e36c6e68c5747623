//! Tests for the one-shot split and its printed output.

use serde_json::Value;
use strictly_teams::{
    DuplicatePolicy, Pin, SplitFormat, TeamsConfig, TeamsErrorKind, format_split, split,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn pins(list: &[(&str, Pin)]) -> Vec<(String, Pin)> {
    list.iter().map(|(n, p)| (n.to_string(), *p)).collect()
}

fn seeded() -> TeamsConfig {
    TeamsConfig::default().with_seed(Some(7))
}

#[test]
fn test_text_output_marks_pinned_members() {
    let config = seeded();
    // One unpinned player goes to team 1, which takes the odd one.
    let teams = split(
        &names(&["Ana", "Beto"]),
        &pins(&[("Ana", Pin::TeamOne)]),
        &config,
    )
    .unwrap();

    let text = format_split(&teams, &config, SplitFormat::Text).unwrap();
    assert_eq!(text, "Team 1 (2)\n  * Ana\n    Beto\n\nTeam 2 (0)");
}

#[test]
fn test_text_output_uses_configured_labels() {
    let config: TeamsConfig =
        toml::from_str("team_one_label = \"Reds\"\nteam_two_label = \"Blues\"\n").unwrap();
    let teams = split(
        &names(&["Ana", "Beto", "Caro"]),
        &pins(&[("Ana", Pin::TeamOne), ("Beto", Pin::TeamTwo), ("Caro", Pin::TeamTwo)]),
        &config,
    )
    .unwrap();

    let text = format_split(&teams, &config, SplitFormat::Text).unwrap();
    assert_eq!(text, "Reds (1)\n  * Ana\n\nBlues (2)\n  * Beto\n  * Caro");
}

#[test]
fn test_json_output_shape() {
    let config = seeded();
    let teams = split(
        &names(&["Ana", "Beto"]),
        &pins(&[("Ana", Pin::TeamOne)]),
        &config,
    )
    .unwrap();

    let json = format_split(&teams, &config, SplitFormat::Json).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(value["team_one"][0]["name"], "Ana");
    assert_eq!(value["team_one"][0]["pin"], "team_one");
    assert_eq!(value["team_one"][1]["name"], "Beto");
    assert_eq!(value["team_one"][1]["pin"], "unpinned");
    assert_eq!(value["team_two"], Value::Array(Vec::new()));
}

#[test]
fn test_unpinned_split_is_balanced() {
    let config = seeded();
    let teams = split(&names(&["A", "B", "C", "D", "E"]), &[], &config).unwrap();
    assert_eq!(teams.team_one().len(), 3);
    assert_eq!(teams.team_two().len(), 2);
}

#[test]
fn test_pin_for_unknown_name_fails() {
    let err = split(
        &names(&["Ana", "Beto"]),
        &pins(&[("Ana", Pin::TeamOne), ("Zoe", Pin::TeamTwo)]),
        &seeded(),
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &TeamsErrorKind::UnknownParticipant("Zoe".to_string())
    );
}

#[test]
fn test_fewer_than_two_participants_fails() {
    let err = split(&names(&["Ana"]), &[], &seeded()).unwrap_err();
    assert_eq!(
        err.kind(),
        &TeamsErrorKind::NotEnoughParticipants { count: 1 }
    );

    // Blank names are skipped, so they do not count.
    let err = split(&names(&["Ana", "   "]), &[], &seeded()).unwrap_err();
    assert_eq!(
        err.kind(),
        &TeamsErrorKind::NotEnoughParticipants { count: 1 }
    );
}

#[test]
fn test_duplicate_name_fails() {
    let err = split(&names(&["Ana", " Ana "]), &[], &seeded()).unwrap_err();
    assert_eq!(
        err.kind(),
        &TeamsErrorKind::DuplicateParticipant("Ana".to_string())
    );
    assert!(err.to_string().contains("'Ana' is listed more than once"));
}

#[test]
fn test_duplicate_name_allowed_by_policy() {
    let config = seeded().with_duplicate_policy(DuplicatePolicy::Allow);
    let teams = split(&names(&["Ana", "Ana"]), &[], &config).unwrap();
    assert_eq!(teams.len(), 2);
}
