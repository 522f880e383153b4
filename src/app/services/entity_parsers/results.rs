//! Parsers for the results tables: matches, singles frames, doubles frames

use tracing::debug;

use super::{non_empty_text, reference};
use crate::app::models::{
    LegacyDoublesFrame, LegacyMatch, LegacySinglesFrame, ParsedRows, Winner,
};
use crate::app::services::table_reader::RawRecord;

const MATCH_ID: &[&str] = &["Match No", "MatchNo", "No"];
const MATCH_HOME_TEAM: &[&str] = &["Home Team", "HomeTeam", "Home"];
const MATCH_AWAY_TEAM: &[&str] = &["Away Team", "AwayTeam", "Away"];
const MATCH_DIVISION: &[&str] = &["Division", "Division Name", "DivisionName"];
const MATCH_VENUE: &[&str] = &["Venue", "Venue Name", "VenueName"];
const MATCH_DATE: &[&str] = &["Match Date", "MatchDate", "Date", "Played"];

const FRAME_MATCH: &[&str] = &["Match No", "MatchNo", "Match"];
const FRAME_NUMBER: &[&str] = &["Frame No", "FrameNo", "Frame", "Number"];
const FRAME_WINNER: &[&str] = &["Winner", "Won By", "WonBy", "Result"];

const SINGLES_HOME_PLAYER: &[&str] = &["Home Player", "HomePlayer", "Home"];
const SINGLES_AWAY_PLAYER: &[&str] = &["Away Player", "AwayPlayer", "Away"];

const DOUBLES_HOME_PLAYERS: [&[&str]; 2] = [
    &["Home Player 1", "HomePlayer1", "Home 1"],
    &["Home Player 2", "HomePlayer2", "Home 2"],
];
const DOUBLES_AWAY_PLAYERS: [&[&str]; 2] = [
    &["Away Player 1", "AwayPlayer1", "Away 1"],
    &["Away Player 2", "AwayPlayer2", "Away 2"],
];

/// Parse match rows.
///
/// Unlike the team table, matches reference their division (and
/// optionally venue) by name rather than by integer id. Rows missing
/// either team reference are unplayed fixture placeholders.
pub fn parse_matches(records: impl Iterator<Item = RawRecord>) -> ParsedRows<LegacyMatch> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some(legacy_id) = reference(&record, MATCH_ID) else {
            parsed.skip_placeholder();
            continue;
        };
        let (Some(home_team_ref), Some(away_team_ref)) = (
            reference(&record, MATCH_HOME_TEAM),
            reference(&record, MATCH_AWAY_TEAM),
        ) else {
            parsed.skip_placeholder();
            continue;
        };

        parsed.rows.push(LegacyMatch {
            legacy_id,
            home_team_ref,
            away_team_ref,
            division_name: non_empty_text(&record, MATCH_DIVISION),
            venue_name: non_empty_text(&record, MATCH_VENUE),
            date: record.date(MATCH_DATE),
        });
    }

    debug!(
        "Parsed {} match rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// Parse singles frame rows. A frame without a match reference, a frame
/// number, or a winner indicator was never played.
pub fn parse_singles_frames(
    records: impl Iterator<Item = RawRecord>,
) -> ParsedRows<LegacySinglesFrame> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some((match_ref, number, winner)) = frame_base(&record) else {
            parsed.skip_placeholder();
            continue;
        };

        parsed.rows.push(LegacySinglesFrame {
            match_ref,
            number,
            home_player_ref: reference(&record, SINGLES_HOME_PLAYER),
            away_player_ref: reference(&record, SINGLES_AWAY_PLAYER),
            winner,
        });
    }

    debug!(
        "Parsed {} singles frame rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// Parse doubles frame rows: a pair of player references per side
pub fn parse_doubles_frames(
    records: impl Iterator<Item = RawRecord>,
) -> ParsedRows<LegacyDoublesFrame> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some((match_ref, number, winner)) = frame_base(&record) else {
            parsed.skip_placeholder();
            continue;
        };

        parsed.rows.push(LegacyDoublesFrame {
            match_ref,
            number,
            home_player_refs: DOUBLES_HOME_PLAYERS.map(|aliases| reference(&record, aliases)),
            away_player_refs: DOUBLES_AWAY_PLAYERS.map(|aliases| reference(&record, aliases)),
            winner,
        });
    }

    debug!(
        "Parsed {} doubles frame rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// The fields every frame row must carry to count as played
fn frame_base(record: &RawRecord) -> Option<(i32, i32, Winner)> {
    let match_ref = reference(record, FRAME_MATCH)?;
    let number = reference(record, FRAME_NUMBER)?;
    let winner_text = non_empty_text(record, FRAME_WINNER)?;
    Some((match_ref, number, Winner::from_legacy(&winner_text)))
}
