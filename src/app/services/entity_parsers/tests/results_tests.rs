//! Tests for the match and frame parsers

use chrono::NaiveDate;

use super::super::{parse_doubles_frames, parse_matches, parse_singles_frames};
use super::{int, record, text};
use crate::app::models::Winner;
use crate::app::services::table_reader::FieldValue;

fn may(day: u32) -> FieldValue {
    FieldValue::Date(NaiveDate::from_ymd_opt(2003, 5, day).unwrap())
}

#[test]
fn test_parse_matches_basic() {
    let records = vec![record(&[
        ("Match No", int(100)),
        ("Home Team", int(5)),
        ("Away Team", int(6)),
        ("Division", text("Premier")),
        ("Venue", text("Club A")),
        ("Match Date", may(17)),
    ])];

    let parsed = parse_matches(records.into_iter());

    assert_eq!(parsed.len(), 1);
    let legacy_match = &parsed.rows[0];
    assert_eq!(legacy_match.legacy_id, 100);
    assert_eq!(legacy_match.home_team_ref, 5);
    assert_eq!(legacy_match.away_team_ref, 6);
    assert_eq!(legacy_match.division_name.as_deref(), Some("Premier"));
    assert_eq!(legacy_match.venue_name.as_deref(), Some("Club A"));
    assert_eq!(
        legacy_match.date,
        Some(NaiveDate::from_ymd_opt(2003, 5, 17).unwrap())
    );
}

#[test]
fn test_parse_matches_requires_both_team_references() {
    let records = vec![
        record(&[("Match No", int(1)), ("Home Team", int(5)), ("Away Team", int(0))]),
        record(&[("Match No", int(2)), ("Away Team", int(6))]),
        record(&[("Match No", int(3)), ("Home Team", int(5)), ("Away Team", int(6))]),
    ];

    let parsed = parse_matches(records.into_iter());

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.placeholders_skipped, 2);
    assert_eq!(parsed.rows[0].legacy_id, 3);
}

#[test]
fn test_parse_matches_tolerates_missing_optional_fields() {
    let records = vec![record(&[
        ("Match No", int(1)),
        ("Home Team", int(5)),
        ("Away Team", int(6)),
    ])];

    let parsed = parse_matches(records.into_iter());

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.rows[0].division_name, None);
    assert_eq!(parsed.rows[0].venue_name, None);
    assert_eq!(parsed.rows[0].date, None);
}

#[test]
fn test_parse_singles_frames_basic() {
    let records = vec![
        record(&[
            ("Match No", int(100)),
            ("Frame No", int(1)),
            ("Home Player", int(10)),
            ("Away Player", int(20)),
            ("Winner", text("Home")),
        ]),
        record(&[
            ("Match No", int(100)),
            ("Frame No", int(2)),
            ("Home Player", int(11)),
            ("Away Player", int(21)),
            ("Winner", text("a")),
        ]),
    ];

    let parsed = parse_singles_frames(records.into_iter());

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.rows[0].match_ref, 100);
    assert_eq!(parsed.rows[0].number, 1);
    assert_eq!(parsed.rows[0].home_player_ref, Some(10));
    assert_eq!(parsed.rows[0].winner, Winner::Home);
    assert_eq!(parsed.rows[1].winner, Winner::Away);
}

#[test]
fn test_parse_singles_frames_skips_unplayed_rows() {
    let records = vec![
        // No winner recorded
        record(&[("Match No", int(100)), ("Frame No", int(1))]),
        // No match reference
        record(&[("Frame No", int(2)), ("Winner", text("Home"))]),
        record(&[("Match No", int(0)), ("Frame No", int(3)), ("Winner", text("Home"))]),
        // No frame number
        record(&[("Match No", int(100)), ("Winner", text("Away"))]),
    ];

    let parsed = parse_singles_frames(records.into_iter());

    assert_eq!(parsed.len(), 0);
    assert_eq!(parsed.placeholders_skipped, 4);
}

#[test]
fn test_parse_singles_frames_keeps_drawn_frames() {
    let records = vec![record(&[
        ("Match No", int(100)),
        ("Frame No", int(1)),
        ("Winner", text("void")),
    ])];

    let parsed = parse_singles_frames(records.into_iter());

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.rows[0].winner, Winner::None);
}

#[test]
fn test_parse_singles_frames_allows_walkover_sides() {
    // A forfeited side has no player reference
    let records = vec![record(&[
        ("Match No", int(100)),
        ("Frame No", int(1)),
        ("Home Player", int(10)),
        ("Winner", text("Home")),
    ])];

    let parsed = parse_singles_frames(records.into_iter());

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.rows[0].home_player_ref, Some(10));
    assert_eq!(parsed.rows[0].away_player_ref, None);
}

#[test]
fn test_parse_doubles_frames_basic() {
    let records = vec![record(&[
        ("Match No", int(100)),
        ("Frame No", int(5)),
        ("Home Player 1", int(10)),
        ("Home Player 2", int(11)),
        ("Away Player 1", int(20)),
        ("Away Player 2", int(0)),
        ("Winner", text("away")),
    ])];

    let parsed = parse_doubles_frames(records.into_iter());

    assert_eq!(parsed.len(), 1);
    let frame = &parsed.rows[0];
    assert_eq!(frame.match_ref, 100);
    assert_eq!(frame.number, 5);
    assert_eq!(frame.home_player_refs, [Some(10), Some(11)]);
    assert_eq!(frame.away_player_refs, [Some(20), None]);
    assert_eq!(frame.winner, Winner::Away);
}

#[test]
fn test_parse_doubles_frames_skips_unplayed_rows() {
    let records = vec![record(&[
        ("Match No", int(100)),
        ("Frame No", int(5)),
        ("Home Player 1", int(10)),
    ])];

    let parsed = parse_doubles_frames(records.into_iter());

    assert_eq!(parsed.len(), 0);
    assert_eq!(parsed.placeholders_skipped, 1);
}
