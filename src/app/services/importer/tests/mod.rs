//! Test utilities and test modules for the import pipeline
//!
//! Pipeline tests run against real table files written into temp
//! directories with the table builder from the reader's test support, so
//! the whole chain from bytes to store commits is exercised.


use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::Path;

use crate::app::services::table_reader::tests::{
    TableBuilder, encode_date, encode_long, encode_short, encode_text, zeros,
};
use crate::constants::type_tags;

/// Day count for a calendar date in the legacy engine's numbering
pub fn day_count(date: NaiveDate) -> u32 {
    date.num_days_from_ce() as u32
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 5, 17).unwrap()
}

fn write_table(dir: &Path, file_name: &str, builder: &TableBuilder) {
    fs::write(dir.join(file_name), builder.build()).unwrap();
}

/// One division: (1, "Premier")
pub fn write_division_table(dir: &Path) {
    let mut builder = TableBuilder::new()
        .table_name("DIVISION.DB")
        .field("Division No", type_tags::LONG, 4)
        .field("Division Name", type_tags::TEXT, 20);
    builder.push_record(&[&encode_long(1), &encode_text("Premier", 20)]);
    write_table(dir, "DIVISION.DB", &builder);
}

/// One venue: (1, "Club A")
pub fn write_venue_table(dir: &Path) {
    let mut builder = TableBuilder::new()
        .table_name("VENUE.DB")
        .field("Venue No", type_tags::LONG, 4)
        .field("Venue Name", type_tags::TEXT, 20)
        .field("Address 1", type_tags::TEXT, 20);
    builder.push_record(&[&encode_long(1), &encode_text("Club A", 20), &encode_text("1 High St", 20)]);
    write_table(dir, "VENUE.DB", &builder);
}

/// One team: (1, "Red Lion") at venue 1, division 1, with legacy
/// statistics columns the import must ignore
pub fn write_team_table(dir: &Path) {
    let mut builder = TableBuilder::new()
        .table_name("TEAM.DB")
        .field("Team No", type_tags::LONG, 4)
        .field("Team Name", type_tags::TEXT, 20)
        .field("Venue No", type_tags::SHORT, 2)
        .field("Division No", type_tags::SHORT, 2)
        .field("Won", type_tags::SHORT, 2)
        .field("Points", type_tags::SHORT, 2);
    builder.push_record(&[
        &encode_long(1),
        &encode_text("RED LION", 20),
        &encode_short(1),
        &encode_short(1),
        &encode_short(12),
        &encode_short(34),
    ]);
    write_table(dir, "TEAM.DB", &builder);
}

/// One player: (1, "John Smith") on team 1, with a legacy rating column
pub fn write_player_table(dir: &Path) {
    let mut builder = TableBuilder::new()
        .table_name("PLAYER.DB")
        .field("Player No", type_tags::LONG, 4)
        .field("Player Name", type_tags::TEXT, 30)
        .field("Team No", type_tags::SHORT, 2)
        .field("Rating", type_tags::SHORT, 2);
    builder.push_record(&[
        &encode_long(1),
        &encode_text("JOHN SMITH", 30),
        &encode_short(1),
        &encode_short(87),
    ]);
    write_table(dir, "PLAYER.DB", &builder);
}

/// One match: (1, team 1 vs team 1, division "Premier", sample date)
pub fn write_match_table(dir: &Path) {
    let mut builder = TableBuilder::new()
        .table_name("MATCH.DB")
        .field("Match No", type_tags::LONG, 4)
        .field("Home Team", type_tags::SHORT, 2)
        .field("Away Team", type_tags::SHORT, 2)
        .field("Division", type_tags::TEXT, 20)
        .field("Match Date", type_tags::DATE, 4);
    builder.push_record(&[
        &encode_long(1),
        &encode_short(1),
        &encode_short(1),
        &encode_text("Premier", 20),
        &encode_date(day_count(sample_date())),
    ]);
    write_table(dir, "MATCH.DB", &builder);
}

/// Singles frames referencing the given legacy match ids, one frame each
pub fn write_singles_table(dir: &Path, match_refs: &[i32]) {
    let mut builder = TableBuilder::new()
        .table_name("FRAME.DB")
        .field("Match No", type_tags::LONG, 4)
        .field("Frame No", type_tags::SHORT, 2)
        .field("Home Player", type_tags::SHORT, 2)
        .field("Away Player", type_tags::SHORT, 2)
        .field("Winner", type_tags::TEXT, 6);
    for &match_ref in match_refs {
        builder.push_record(&[
            &encode_long(match_ref),
            &encode_short(1),
            &encode_short(1),
            &zeros(2),
            &encode_text("Home", 6),
        ]);
    }
    write_table(dir, "FRAME.DB", &builder);
}

/// One doubles frame on the given legacy match id
pub fn write_doubles_table(dir: &Path, match_ref: i32) {
    let mut builder = TableBuilder::new()
        .table_name("DOUBLES.DB")
        .field("Match No", type_tags::LONG, 4)
        .field("Frame No", type_tags::SHORT, 2)
        .field("Home Player 1", type_tags::SHORT, 2)
        .field("Home Player 2", type_tags::SHORT, 2)
        .field("Away Player 1", type_tags::SHORT, 2)
        .field("Away Player 2", type_tags::SHORT, 2)
        .field("Winner", type_tags::TEXT, 6);
    builder.push_record(&[
        &encode_long(match_ref),
        &encode_short(6),
        &encode_short(1),
        &zeros(2),
        &zeros(2),
        &zeros(2),
        &encode_text("Away", 6),
    ]);
    write_table(dir, "DOUBLES.DB", &builder);
}

/// Write the full seven-table scenario from the end-to-end property
pub fn write_full_source(dir: &Path) {
    write_division_table(dir);
    write_venue_table(dir);
    write_team_table(dir);
    write_player_table(dir);
    write_match_table(dir);
    write_singles_table(dir, &[1]);
    write_doubles_table(dir, 1);
}
