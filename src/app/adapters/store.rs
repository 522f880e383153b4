//! Target store abstraction consumed by the import pipeline
//!
//! The pipeline only ever needs three things from the application's data
//! store: find an entity by its natural key within a season, create an
//! entity with freshly minted identifiers, and persist whatever has been
//! created. [`LeagueStore`] captures exactly that surface so the importer
//! can be driven against the real store or the bundled
//! [`MemoryStore`](super::memory_store::MemoryStore).
//!
//! The `New*` field structs deliberately carry identity and relationship
//! fields only. Win/loss tallies, rankings, and points are recomputed from
//! imported frames, so the store never accepts them from legacy data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Result;
use crate::app::models::Winner;

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), &self.0.to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(SeasonId);
entity_id!(DivisionId);
entity_id!(VenueId);
entity_id!(TeamId);
entity_id!(PlayerId);
entity_id!(MatchId);
entity_id!(FrameId);

/// Fields for a division to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewDivision {
    pub name: String,
}

/// Fields for a venue to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Fields for a team to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub venue: Option<VenueId>,
    pub division: Option<DivisionId>,
    pub captain: Option<String>,
    pub phone: Option<String>,
}

/// Fields for a player to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub team: Option<TeamId>,
}

/// Fields for a match to be created.
///
/// The natural key is the (date, home team, away team) triple; unresolved
/// references stay `None` and still participate in key comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub home_team: Option<TeamId>,
    pub away_team: Option<TeamId>,
    pub division: Option<DivisionId>,
    pub venue: Option<VenueId>,
    pub date: Option<NaiveDate>,
}

/// Fields for a singles frame to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewSinglesFrame {
    pub match_id: MatchId,
    pub number: i32,
    pub home_player: Option<PlayerId>,
    pub away_player: Option<PlayerId>,
    pub winner: Winner,
}

/// Fields for a doubles frame to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewDoublesFrame {
    pub match_id: MatchId,
    pub number: i32,
    pub home_players: [Option<PlayerId>; 2],
    pub away_players: [Option<PlayerId>; 2],
    pub winner: Winner,
}

/// The store operations the import pipeline depends on.
///
/// Every find is scoped to a season; `find` followed by `create` is the
/// pipeline's sole idempotency mechanism, which is safe because an import
/// run is the only writer.
pub trait LeagueStore {
    /// Look up a division by name, case-insensitively
    fn find_division(&self, season: SeasonId, name: &str) -> Option<DivisionId>;
    fn create_division(&mut self, season: SeasonId, division: NewDivision) -> Result<DivisionId>;

    /// Look up a venue by name, case-insensitively
    fn find_venue(&self, season: SeasonId, name: &str) -> Option<VenueId>;
    fn create_venue(&mut self, season: SeasonId, venue: NewVenue) -> Result<VenueId>;

    /// Look up a team by name, case-insensitively
    fn find_team(&self, season: SeasonId, name: &str) -> Option<TeamId>;
    fn create_team(&mut self, season: SeasonId, team: NewTeam) -> Result<TeamId>;

    /// Look up a player by first and last name, case-insensitively
    fn find_player(&self, season: SeasonId, first_name: &str, last_name: &str)
    -> Option<PlayerId>;
    fn create_player(&mut self, season: SeasonId, player: NewPlayer) -> Result<PlayerId>;

    /// Look up a match by its (date, home team, away team) natural key
    fn find_match(&self, season: SeasonId, candidate: &NewMatch) -> Option<MatchId>;
    fn create_match(&mut self, season: SeasonId, new_match: NewMatch) -> Result<MatchId>;

    /// Whether a singles frame with this number already exists on a match
    fn has_singles_frame(&self, match_id: MatchId, number: i32) -> bool;
    fn create_singles_frame(&mut self, frame: NewSinglesFrame) -> Result<FrameId>;

    /// Whether a doubles frame with this number already exists on a match
    fn has_doubles_frame(&self, match_id: MatchId, number: i32) -> bool;
    fn create_doubles_frame(&mut self, frame: NewDoublesFrame) -> Result<FrameId>;

    /// The season's currently recorded (start, end) date range, if any
    fn season_date_range(&self, season: SeasonId) -> Option<(NaiveDate, NaiveDate)>;

    /// Extend the season's date range to cover `[start, end]`
    fn widen_season_dates(&mut self, season: SeasonId, start: NaiveDate, end: NaiveDate)
    -> Result<()>;

    /// Flush created entities to durable storage
    fn persist(&mut self) -> Result<()>;
}
