//! Legacy-id to stable-id mapping state threaded through the pipeline

use std::collections::HashMap;

use crate::app::adapters::store::{DivisionId, MatchId, PlayerId, SeasonId, TeamId, VenueId};

/// The identifier maps built up as the import steps run.
///
/// Each map translates one kind's legacy integer ids to the stable ids
/// minted (or found) in the target store. Divisions and venues also get a
/// name map, because the match table references them by name rather than
/// by id. Insertion is first-wins; a lookup miss is an expected outcome
/// that the caller turns into a warning or a skip, never an error.
#[derive(Debug, Default)]
pub struct ImportContext {
    pub season: SeasonId,
    divisions: HashMap<i32, DivisionId>,
    division_names: HashMap<String, DivisionId>,
    venues: HashMap<i32, VenueId>,
    venue_names: HashMap<String, VenueId>,
    teams: HashMap<i32, TeamId>,
    players: HashMap<i32, PlayerId>,
    matches: HashMap<i32, MatchId>,
}

impl ImportContext {
    pub fn new(season: SeasonId) -> Self {
        Self {
            season,
            ..Self::default()
        }
    }

    pub fn map_division(&mut self, legacy_id: i32, id: DivisionId) {
        self.divisions.entry(legacy_id).or_insert(id);
    }

    pub fn map_division_name(&mut self, name: &str, id: DivisionId) {
        self.division_names.entry(name.to_lowercase()).or_insert(id);
    }

    pub fn division(&self, legacy_id: i32) -> Option<DivisionId> {
        self.divisions.get(&legacy_id).copied()
    }

    pub fn division_by_name(&self, name: &str) -> Option<DivisionId> {
        self.division_names.get(&name.to_lowercase()).copied()
    }

    pub fn map_venue(&mut self, legacy_id: i32, id: VenueId) {
        self.venues.entry(legacy_id).or_insert(id);
    }

    pub fn map_venue_name(&mut self, name: &str, id: VenueId) {
        self.venue_names.entry(name.to_lowercase()).or_insert(id);
    }

    pub fn venue(&self, legacy_id: i32) -> Option<VenueId> {
        self.venues.get(&legacy_id).copied()
    }

    pub fn venue_by_name(&self, name: &str) -> Option<VenueId> {
        self.venue_names.get(&name.to_lowercase()).copied()
    }

    pub fn map_team(&mut self, legacy_id: i32, id: TeamId) {
        self.teams.entry(legacy_id).or_insert(id);
    }

    pub fn team(&self, legacy_id: i32) -> Option<TeamId> {
        self.teams.get(&legacy_id).copied()
    }

    pub fn map_player(&mut self, legacy_id: i32, id: PlayerId) {
        self.players.entry(legacy_id).or_insert(id);
    }

    pub fn player(&self, legacy_id: i32) -> Option<PlayerId> {
        self.players.get(&legacy_id).copied()
    }

    pub fn map_match(&mut self, legacy_id: i32, id: MatchId) {
        self.matches.entry(legacy_id).or_insert(id);
    }

    pub fn match_id(&self, legacy_id: i32) -> Option<MatchId> {
        self.matches.get(&legacy_id).copied()
    }
}
