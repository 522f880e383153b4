//! Parsers that turn raw table records into typed staging rows
//!
//! One parser per entity kind. Each consumes the record sequence of a
//! single table file and produces [`ParsedRows`] of the matching staging
//! type, applying that kind's field aliases and filtering rules:
//!
//! - Field names vary across legacy tool releases, so every logical field
//!   is looked up through a priority-ordered alias list, case-insensitively.
//! - Integer references use `0` as "unset"; such values become `None`.
//! - Placeholder rows (blank names, the sample-data division, the walkover
//!   player, unplayed frames) are dropped and counted.
//!
//! The parsers are pure with respect to the store: resolving references
//! against already-imported entities happens later, in the import pipeline.

pub mod results;
pub mod roster;

#[cfg(test)]
pub mod tests;

pub use results::{parse_doubles_frames, parse_matches, parse_singles_frames};
pub use roster::{parse_divisions, parse_players, parse_teams, parse_venues};

use crate::app::services::table_reader::RawRecord;

/// Look up an integer reference, treating `0` as unset
pub(crate) fn reference(record: &RawRecord, aliases: &[&str]) -> Option<i32> {
    record.integer(aliases).filter(|&value| value != 0).map(|value| value as i32)
}

/// Look up a text field, dropping values that trim to nothing
pub(crate) fn non_empty_text(record: &RawRecord, aliases: &[&str]) -> Option<String> {
    record
        .text(aliases)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
