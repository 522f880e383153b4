//! In-memory [`LeagueStore`] used by tests and CLI validation imports

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use super::store::{
    DivisionId, FrameId, LeagueStore, MatchId, NewDivision, NewDoublesFrame, NewMatch, NewPlayer,
    NewSinglesFrame, NewTeam, NewVenue, PlayerId, SeasonId, TeamId, VenueId,
};
use crate::{Error, Result};

/// One created entity: its minted id plus the fields it was created with
#[derive(Debug, Clone)]
struct Stored<I, F> {
    id: I,
    fields: F,
}

#[derive(Debug, Clone, Default)]
struct SeasonRecord {
    name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    divisions: Vec<Stored<DivisionId, NewDivision>>,
    venues: Vec<Stored<VenueId, NewVenue>>,
    teams: Vec<Stored<TeamId, NewTeam>>,
    players: Vec<Stored<PlayerId, NewPlayer>>,
    matches: Vec<Stored<MatchId, NewMatch>>,
}

/// Per-season entity counts, mostly for reporting and assertions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub divisions: usize,
    pub venues: usize,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
}

/// A store that holds everything in process memory.
///
/// `persist` is a no-op; the point of this implementation is to let the
/// full pipeline run against real store semantics (natural-key lookups,
/// id minting, date-range widening) without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    seasons: IndexMap<SeasonId, SeasonRecord>,
    singles_frames: Vec<Stored<FrameId, NewSinglesFrame>>,
    doubles_frames: Vec<Stored<FrameId, NewDoublesFrame>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty season container and return its id
    pub fn create_season(&mut self, name: &str) -> SeasonId {
        let id = SeasonId::new();
        self.seasons.insert(
            id,
            SeasonRecord {
                name: name.to_string(),
                ..SeasonRecord::default()
            },
        );
        debug!("Created season '{}' ({})", name, id);
        id
    }

    pub fn season_name(&self, season: SeasonId) -> Option<&str> {
        self.seasons.get(&season).map(|record| record.name.as_str())
    }

    pub fn counts(&self, season: SeasonId) -> StoreCounts {
        let Some(record) = self.seasons.get(&season) else {
            return StoreCounts::default();
        };
        StoreCounts {
            divisions: record.divisions.len(),
            venues: record.venues.len(),
            teams: record.teams.len(),
            players: record.players.len(),
            matches: record.matches.len(),
        }
    }

    pub fn singles_frame_count(&self) -> usize {
        self.singles_frames.len()
    }

    pub fn doubles_frame_count(&self) -> usize {
        self.doubles_frames.len()
    }

    pub fn division(&self, id: DivisionId) -> Option<&NewDivision> {
        self.seasons
            .values()
            .flat_map(|record| &record.divisions)
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn venue(&self, id: VenueId) -> Option<&NewVenue> {
        self.seasons
            .values()
            .flat_map(|record| &record.venues)
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn team(&self, id: TeamId) -> Option<&NewTeam> {
        self.seasons
            .values()
            .flat_map(|record| &record.teams)
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn player(&self, id: PlayerId) -> Option<&NewPlayer> {
        self.seasons
            .values()
            .flat_map(|record| &record.players)
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn match_record(&self, id: MatchId) -> Option<&NewMatch> {
        self.seasons
            .values()
            .flat_map(|record| &record.matches)
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn singles_frame(&self, id: FrameId) -> Option<&NewSinglesFrame> {
        self.singles_frames
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| &stored.fields)
    }

    pub fn singles_frame_by_number(
        &self,
        match_id: MatchId,
        number: i32,
    ) -> Option<&NewSinglesFrame> {
        self.singles_frames
            .iter()
            .find(|stored| stored.fields.match_id == match_id && stored.fields.number == number)
            .map(|stored| &stored.fields)
    }

    fn season(&self, season: SeasonId) -> Option<&SeasonRecord> {
        self.seasons.get(&season)
    }

    fn season_mut(&mut self, season: SeasonId) -> Result<&mut SeasonRecord> {
        self.seasons
            .get_mut(&season)
            .ok_or_else(|| Error::store(format!("unknown season {}", season)))
    }
}

impl LeagueStore for MemoryStore {
    fn find_division(&self, season: SeasonId, name: &str) -> Option<DivisionId> {
        self.season(season)?
            .divisions
            .iter()
            .find(|stored| stored.fields.name.eq_ignore_ascii_case(name))
            .map(|stored| stored.id)
    }

    fn create_division(&mut self, season: SeasonId, division: NewDivision) -> Result<DivisionId> {
        let id = DivisionId::new();
        self.season_mut(season)?
            .divisions
            .push(Stored { id, fields: division });
        Ok(id)
    }

    fn find_venue(&self, season: SeasonId, name: &str) -> Option<VenueId> {
        self.season(season)?
            .venues
            .iter()
            .find(|stored| stored.fields.name.eq_ignore_ascii_case(name))
            .map(|stored| stored.id)
    }

    fn create_venue(&mut self, season: SeasonId, venue: NewVenue) -> Result<VenueId> {
        let id = VenueId::new();
        self.season_mut(season)?
            .venues
            .push(Stored { id, fields: venue });
        Ok(id)
    }

    fn find_team(&self, season: SeasonId, name: &str) -> Option<TeamId> {
        self.season(season)?
            .teams
            .iter()
            .find(|stored| stored.fields.name.eq_ignore_ascii_case(name))
            .map(|stored| stored.id)
    }

    fn create_team(&mut self, season: SeasonId, team: NewTeam) -> Result<TeamId> {
        let id = TeamId::new();
        self.season_mut(season)?
            .teams
            .push(Stored { id, fields: team });
        Ok(id)
    }

    fn find_player(
        &self,
        season: SeasonId,
        first_name: &str,
        last_name: &str,
    ) -> Option<PlayerId> {
        self.season(season)?
            .players
            .iter()
            .find(|stored| {
                stored.fields.first_name.eq_ignore_ascii_case(first_name)
                    && stored.fields.last_name.eq_ignore_ascii_case(last_name)
            })
            .map(|stored| stored.id)
    }

    fn create_player(&mut self, season: SeasonId, player: NewPlayer) -> Result<PlayerId> {
        let id = PlayerId::new();
        self.season_mut(season)?
            .players
            .push(Stored { id, fields: player });
        Ok(id)
    }

    fn find_match(&self, season: SeasonId, candidate: &NewMatch) -> Option<MatchId> {
        self.season(season)?
            .matches
            .iter()
            .find(|stored| {
                stored.fields.date == candidate.date
                    && stored.fields.home_team == candidate.home_team
                    && stored.fields.away_team == candidate.away_team
            })
            .map(|stored| stored.id)
    }

    fn create_match(&mut self, season: SeasonId, new_match: NewMatch) -> Result<MatchId> {
        let id = MatchId::new();
        self.season_mut(season)?
            .matches
            .push(Stored { id, fields: new_match });
        Ok(id)
    }

    fn has_singles_frame(&self, match_id: MatchId, number: i32) -> bool {
        self.singles_frames
            .iter()
            .any(|stored| stored.fields.match_id == match_id && stored.fields.number == number)
    }

    fn create_singles_frame(&mut self, frame: NewSinglesFrame) -> Result<FrameId> {
        let id = FrameId::new();
        self.singles_frames.push(Stored { id, fields: frame });
        Ok(id)
    }

    fn has_doubles_frame(&self, match_id: MatchId, number: i32) -> bool {
        self.doubles_frames
            .iter()
            .any(|stored| stored.fields.match_id == match_id && stored.fields.number == number)
    }

    fn create_doubles_frame(&mut self, frame: NewDoublesFrame) -> Result<FrameId> {
        let id = FrameId::new();
        self.doubles_frames.push(Stored { id, fields: frame });
        Ok(id)
    }

    fn season_date_range(&self, season: SeasonId) -> Option<(NaiveDate, NaiveDate)> {
        let record = self.season(season)?;
        match (record.start_date, record.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    fn widen_season_dates(
        &mut self,
        season: SeasonId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<()> {
        let record = self.season_mut(season)?;
        record.start_date = Some(record.start_date.map_or(start, |current| current.min(start)));
        record.end_date = Some(record.end_date.map_or(end, |current| current.max(end)));
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        debug!(
            "Memory store persist: {} seasons, {} singles frames, {} doubles frames",
            self.seasons.len(),
            self.singles_frames.len(),
            self.doubles_frames.len()
        );
        Ok(())
    }
}
