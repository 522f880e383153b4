//! Data models for the legacy league import
//!
//! This module contains the staging row structures produced by the entity
//! parsers, the entity-kind enumeration that drives the import pipeline,
//! and the shared name-normalization helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{IMPORT_STEP_COUNT, table_files};

// =============================================================================
// Entity Kinds
// =============================================================================

/// The seven entity kinds an import run processes, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Division,
    Venue,
    Team,
    Player,
    Match,
    SinglesFrame,
    DoublesFrame,
}

impl EntityKind {
    /// All kinds in the strict import order
    pub const ALL: [EntityKind; IMPORT_STEP_COUNT] = [
        EntityKind::Division,
        EntityKind::Venue,
        EntityKind::Team,
        EntityKind::Player,
        EntityKind::Match,
        EntityKind::SinglesFrame,
        EntityKind::DoublesFrame,
    ];

    /// Human-readable step name used in progress notifications and reports
    pub fn step_name(&self) -> &'static str {
        match self {
            EntityKind::Division => "Divisions",
            EntityKind::Venue => "Venues",
            EntityKind::Team => "Teams",
            EntityKind::Player => "Players",
            EntityKind::Match => "Matches",
            EntityKind::SinglesFrame => "Singles frames",
            EntityKind::DoublesFrame => "Doubles frames",
        }
    }

    /// Expected source file stem for this kind
    pub fn file_stem(&self) -> &'static str {
        match self {
            EntityKind::Division => table_files::DIVISION,
            EntityKind::Venue => table_files::VENUE,
            EntityKind::Team => table_files::TEAM,
            EntityKind::Player => table_files::PLAYER,
            EntityKind::Match => table_files::MATCH,
            EntityKind::SinglesFrame => table_files::SINGLES_FRAME,
            EntityKind::DoublesFrame => table_files::DOUBLES_FRAME,
        }
    }

    /// Expected source file name, in the convention's canonical casing
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), table_files::EXTENSION)
    }

    /// Check whether a directory entry matches this kind's expected file
    pub fn matches_file_name(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.file_name())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step_name())
    }
}

// =============================================================================
// Frame Winner
// =============================================================================

/// Normalized frame result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Home,
    Away,
    /// Played but unscored, drawn, or voided
    None,
}

impl Winner {
    /// Normalize the legacy winner text.
    ///
    /// The legacy tool wrote several spellings over the years ("Home",
    /// "HOME WIN", "h", "Away", "Draw", "Void"). Anything that is not
    /// recognizably a home or away result maps to [`Winner::None`].
    pub fn from_legacy(text: &str) -> Self {
        let lowered = text.trim().to_ascii_lowercase();
        if lowered.starts_with('h') {
            Winner::Home
        } else if lowered.starts_with('a') {
            Winner::Away
        } else {
            Winner::None
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Winner::Home => "Home",
            Winner::Away => "Away",
            Winner::None => "None",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Staging Rows
// =============================================================================

/// One division row lifted out of the legacy table
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyDivision {
    /// Legacy integer id, the key other tables reference
    pub legacy_id: i32,
    /// Division name, the natural key within a season
    pub name: String,
}

/// One venue row lifted out of the legacy table
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyVenue {
    pub legacy_id: i32,
    /// Venue name, the natural key within a season
    pub name: String,
    /// Non-blank address lines joined into one string
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// One team row lifted out of the legacy table
///
/// Venue and division references stay as raw legacy integers here; the
/// orchestrator resolves them against its identifier maps.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyTeam {
    pub legacy_id: i32,
    /// Canonical-cased team name, the natural key within a season
    pub name: String,
    pub venue_ref: Option<i32>,
    pub division_ref: Option<i32>,
    pub captain: Option<String>,
    pub phone: Option<String>,
}

/// One player row lifted out of the legacy table
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPlayer {
    pub legacy_id: i32,
    /// First token of the legacy full name, canonical-cased
    pub first_name: String,
    /// Remaining tokens of the legacy full name, canonical-cased
    pub last_name: String,
    pub team_ref: Option<i32>,
}

/// One match row lifted out of the legacy table
///
/// Unlike teams, the legacy match table references its division (and
/// sometimes venue) by name rather than by integer id.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyMatch {
    pub legacy_id: i32,
    pub home_team_ref: i32,
    pub away_team_ref: i32,
    pub division_name: Option<String>,
    pub venue_name: Option<String>,
    pub date: Option<NaiveDate>,
}

/// One singles frame row lifted out of the legacy table
#[derive(Debug, Clone, PartialEq)]
pub struct LegacySinglesFrame {
    pub match_ref: i32,
    /// Frame number within the match, part of the natural key
    pub number: i32,
    pub home_player_ref: Option<i32>,
    pub away_player_ref: Option<i32>,
    pub winner: Winner,
}

/// One doubles frame row lifted out of the legacy table
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyDoublesFrame {
    pub match_ref: i32,
    pub number: i32,
    pub home_player_refs: [Option<i32>; 2],
    pub away_player_refs: [Option<i32>; 2],
    pub winner: Winner,
}

// =============================================================================
// Parser Output
// =============================================================================

/// Rows produced by one entity parser plus its skip accounting
#[derive(Debug, Clone, Default)]
pub struct ParsedRows<T> {
    pub rows: Vec<T>,
    /// Placeholder or unusable rows the parser dropped
    pub placeholders_skipped: usize,
}

impl<T> ParsedRows<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            placeholders_skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Record one dropped placeholder row
    pub fn skip_placeholder(&mut self) {
        self.placeholders_skipped += 1;
    }
}

// =============================================================================
// Name Normalization
// =============================================================================

/// Canonical-case a name: each whitespace-separated word gets an upper
/// first character and lowered remainder, collapsing repeated whitespace.
pub fn canonical_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a legacy full name into (first, last-name tokens), both
/// canonical-cased. A single-token name yields an empty last name.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default();
    let rest: Vec<&str> = tokens.collect();
    (canonical_case(first), canonical_case(&rest.join(" ")))
}
