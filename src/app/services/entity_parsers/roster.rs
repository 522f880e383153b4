//! Parsers for the roster tables: divisions, venues, teams, players

use tracing::debug;

use super::{non_empty_text, reference};
use crate::app::models::{
    LegacyDivision, LegacyPlayer, LegacyTeam, LegacyVenue, ParsedRows, canonical_case,
    split_full_name,
};
use crate::app::services::table_reader::RawRecord;
use crate::constants::{DIVISION_PLACEHOLDER_NAME, VENUE_ADDRESS_LINES, WALKOVER_PLAYER_NAME};

const DIVISION_ID: &[&str] = &["Division No", "DivisionNo", "No"];
const DIVISION_NAME: &[&str] = &["Division Name", "DivisionName", "Division", "Name"];

const VENUE_ID: &[&str] = &["Venue No", "VenueNo", "No"];
const VENUE_NAME: &[&str] = &["Venue Name", "VenueName", "Venue", "Name"];
const VENUE_ADDRESS: [&[&str]; VENUE_ADDRESS_LINES] = [
    &["Address 1", "Address1"],
    &["Address 2", "Address2"],
    &["Address 3", "Address3"],
    &["Address 4", "Address4"],
];
const VENUE_PHONE: &[&str] = &["Phone No", "PhoneNo", "Phone", "Telephone"];

const TEAM_ID: &[&str] = &["Team No", "TeamNo", "No"];
const TEAM_NAME: &[&str] = &["Team Name", "TeamName", "Team", "Name"];
const TEAM_VENUE: &[&str] = &["Venue No", "VenueNo", "Venue"];
const TEAM_DIVISION: &[&str] = &["Division No", "DivisionNo", "Division"];
const TEAM_CAPTAIN: &[&str] = &["Captain", "Contact", "Contact Name"];
const TEAM_PHONE: &[&str] = &["Phone No", "PhoneNo", "Phone", "Telephone"];

const PLAYER_ID: &[&str] = &["Player No", "PlayerNo", "No"];
const PLAYER_NAME: &[&str] = &["Player Name", "PlayerName", "Player", "Name"];
const PLAYER_TEAM: &[&str] = &["Team No", "TeamNo", "Team"];

/// Parse division rows.
///
/// Rows without an id or a name are placeholders, as is the legacy tool's
/// sample-data division.
pub fn parse_divisions(records: impl Iterator<Item = RawRecord>) -> ParsedRows<LegacyDivision> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some(legacy_id) = reference(&record, DIVISION_ID) else {
            parsed.skip_placeholder();
            continue;
        };
        let Some(name) = non_empty_text(&record, DIVISION_NAME) else {
            parsed.skip_placeholder();
            continue;
        };
        if name.eq_ignore_ascii_case(DIVISION_PLACEHOLDER_NAME) {
            parsed.skip_placeholder();
            continue;
        }
        parsed.rows.push(LegacyDivision { legacy_id, name });
    }

    debug!(
        "Parsed {} division rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// Parse venue rows, concatenating the address lines into one string
pub fn parse_venues(records: impl Iterator<Item = RawRecord>) -> ParsedRows<LegacyVenue> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some(legacy_id) = reference(&record, VENUE_ID) else {
            parsed.skip_placeholder();
            continue;
        };
        let Some(name) = non_empty_text(&record, VENUE_NAME) else {
            parsed.skip_placeholder();
            continue;
        };

        let lines: Vec<String> = VENUE_ADDRESS
            .iter()
            .filter_map(|aliases| non_empty_text(&record, aliases))
            .collect();
        let address = if lines.is_empty() {
            None
        } else {
            Some(lines.join(", "))
        };

        parsed.rows.push(LegacyVenue {
            legacy_id,
            name,
            address,
            phone: non_empty_text(&record, VENUE_PHONE),
        });
    }

    debug!(
        "Parsed {} venue rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// Parse team rows. Names are canonical-cased; venue and division
/// references are kept as raw legacy ids for the pipeline to resolve.
pub fn parse_teams(records: impl Iterator<Item = RawRecord>) -> ParsedRows<LegacyTeam> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some(legacy_id) = reference(&record, TEAM_ID) else {
            parsed.skip_placeholder();
            continue;
        };
        let Some(name) = non_empty_text(&record, TEAM_NAME) else {
            parsed.skip_placeholder();
            continue;
        };

        parsed.rows.push(LegacyTeam {
            legacy_id,
            name: canonical_case(&name),
            venue_ref: reference(&record, TEAM_VENUE),
            division_ref: reference(&record, TEAM_DIVISION),
            captain: non_empty_text(&record, TEAM_CAPTAIN),
            phone: non_empty_text(&record, TEAM_PHONE),
        });
    }

    debug!(
        "Parsed {} team rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}

/// Parse player rows.
///
/// The legacy table stores one full-name column; it is split into first
/// and last parts here. The reserved walkover entry stands in for void
/// frames and is never imported as a real player.
pub fn parse_players(records: impl Iterator<Item = RawRecord>) -> ParsedRows<LegacyPlayer> {
    let mut parsed = ParsedRows::new();

    for record in records {
        if record.is_empty() {
            continue;
        }
        let Some(legacy_id) = reference(&record, PLAYER_ID) else {
            parsed.skip_placeholder();
            continue;
        };
        let Some(full_name) = non_empty_text(&record, PLAYER_NAME) else {
            parsed.skip_placeholder();
            continue;
        };
        if full_name.eq_ignore_ascii_case(WALKOVER_PLAYER_NAME) {
            parsed.skip_placeholder();
            continue;
        }

        let (first_name, last_name) = split_full_name(&full_name);
        parsed.rows.push(LegacyPlayer {
            legacy_id,
            first_name,
            last_name,
            team_ref: reference(&record, PLAYER_TEAM),
        });
    }

    debug!(
        "Parsed {} player rows ({} placeholder rows skipped)",
        parsed.len(),
        parsed.placeholders_skipped
    );
    parsed
}
