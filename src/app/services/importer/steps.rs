//! The seven import steps, one per entity kind
//!
//! Every step follows the same merge/create shape: look the staging row
//! up by natural key first, map the legacy id onto whatever already
//! exists, and only create when nothing matched. Created entities carry
//! identity and relationship fields alone. References are resolved
//! through the [`ImportContext`] maps built by earlier steps; a miss
//! leaves the reference unset with a warning, except for a frame's match
//! reference, which is required and turns the row into an orphan skip.

use super::context::ImportContext;
use super::summary::ImportSummary;
use crate::Result;
use crate::app::adapters::store::{
    LeagueStore, NewDivision, NewDoublesFrame, NewMatch, NewPlayer, NewSinglesFrame, NewTeam,
    NewVenue,
};
use crate::app::models::{
    EntityKind, LegacyDivision, LegacyDoublesFrame, LegacyMatch, LegacyPlayer, LegacySinglesFrame,
    LegacyTeam, LegacyVenue, ParsedRows,
};

pub(super) fn import_divisions<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyDivision>,
) -> Result<()> {
    summary.counts_mut(EntityKind::Division).placeholders_skipped += parsed.placeholders_skipped;

    for row in parsed.rows {
        if let Some(existing) = store.find_division(context.season, &row.name) {
            context.map_division(row.legacy_id, existing);
            context.map_division_name(&row.name, existing);
            summary.counts_mut(EntityKind::Division).duplicates += 1;
            continue;
        }

        let id = store.create_division(context.season, NewDivision {
            name: row.name.clone(),
        })?;
        context.map_division(row.legacy_id, id);
        context.map_division_name(&row.name, id);
        summary.counts_mut(EntityKind::Division).imported += 1;
    }
    Ok(())
}

pub(super) fn import_venues<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyVenue>,
) -> Result<()> {
    summary.counts_mut(EntityKind::Venue).placeholders_skipped += parsed.placeholders_skipped;

    for row in parsed.rows {
        if let Some(existing) = store.find_venue(context.season, &row.name) {
            context.map_venue(row.legacy_id, existing);
            context.map_venue_name(&row.name, existing);
            summary.counts_mut(EntityKind::Venue).duplicates += 1;
            continue;
        }

        let id = store.create_venue(context.season, NewVenue {
            name: row.name.clone(),
            address: row.address,
            phone: row.phone,
        })?;
        context.map_venue(row.legacy_id, id);
        context.map_venue_name(&row.name, id);
        summary.counts_mut(EntityKind::Venue).imported += 1;
    }
    Ok(())
}

pub(super) fn import_teams<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyTeam>,
) -> Result<()> {
    summary.counts_mut(EntityKind::Team).placeholders_skipped += parsed.placeholders_skipped;

    for row in parsed.rows {
        if let Some(existing) = store.find_team(context.season, &row.name) {
            context.map_team(row.legacy_id, existing);
            summary.counts_mut(EntityKind::Team).duplicates += 1;
            continue;
        }

        let venue = resolve(row.venue_ref, |id| context.venue(id), summary, |id| {
            format!("Team '{}' references unknown venue {}; left unset", row.name, id)
        });
        let division = resolve(row.division_ref, |id| context.division(id), summary, |id| {
            format!("Team '{}' references unknown division {}; left unset", row.name, id)
        });

        let id = store.create_team(context.season, NewTeam {
            name: row.name.clone(),
            venue,
            division,
            captain: row.captain,
            phone: row.phone,
        })?;
        context.map_team(row.legacy_id, id);
        summary.counts_mut(EntityKind::Team).imported += 1;
    }
    Ok(())
}

pub(super) fn import_players<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyPlayer>,
) -> Result<()> {
    summary.counts_mut(EntityKind::Player).placeholders_skipped += parsed.placeholders_skipped;

    for row in parsed.rows {
        if let Some(existing) = store.find_player(context.season, &row.first_name, &row.last_name)
        {
            context.map_player(row.legacy_id, existing);
            summary.counts_mut(EntityKind::Player).duplicates += 1;
            continue;
        }

        let team = resolve(row.team_ref, |id| context.team(id), summary, |id| {
            format!(
                "Player '{} {}' references unknown team {}; left unset",
                row.first_name, row.last_name, id
            )
        });

        let id = store.create_player(context.season, NewPlayer {
            first_name: row.first_name,
            last_name: row.last_name,
            team,
        })?;
        context.map_player(row.legacy_id, id);
        summary.counts_mut(EntityKind::Player).imported += 1;
    }
    Ok(())
}

pub(super) fn import_matches<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyMatch>,
) -> Result<()> {
    summary.counts_mut(EntityKind::Match).placeholders_skipped += parsed.placeholders_skipped;

    for row in parsed.rows {
        // The natural key includes the resolved team ids, so references
        // are resolved before the duplicate check
        let home_team = resolve(Some(row.home_team_ref), |id| context.team(id), summary, |id| {
            format!("Match {} references unknown home team {}; left unset", row.legacy_id, id)
        });
        let away_team = resolve(Some(row.away_team_ref), |id| context.team(id), summary, |id| {
            format!("Match {} references unknown away team {}; left unset", row.legacy_id, id)
        });
        let division = resolve_named(
            row.division_name.as_deref(),
            |name| context.division_by_name(name),
            summary,
            |name| {
                format!(
                    "Match {} references unknown division '{}'; left unset",
                    row.legacy_id, name
                )
            },
        );
        let venue = resolve_named(
            row.venue_name.as_deref(),
            |name| context.venue_by_name(name),
            summary,
            |name| {
                format!("Match {} references unknown venue '{}'; left unset", row.legacy_id, name)
            },
        );

        let candidate = NewMatch {
            home_team,
            away_team,
            division,
            venue,
            date: row.date,
        };

        if let Some(existing) = store.find_match(context.season, &candidate) {
            context.map_match(row.legacy_id, existing);
            summary.counts_mut(EntityKind::Match).duplicates += 1;
            continue;
        }

        let id = store.create_match(context.season, candidate)?;
        context.map_match(row.legacy_id, id);
        if let Some(date) = row.date {
            summary.record_date(date);
        }
        summary.counts_mut(EntityKind::Match).imported += 1;
    }

    // Widen the season range only when the observed dates fall outside it
    if let (Some(start), Some(end)) = (summary.earliest_date, summary.latest_date) {
        let covered = store
            .season_date_range(context.season)
            .is_some_and(|(current_start, current_end)| current_start <= start && end <= current_end);
        if !covered {
            store.widen_season_dates(context.season, start, end)?;
        }
    }
    Ok(())
}

pub(super) fn import_singles_frames<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacySinglesFrame>,
) -> Result<()> {
    summary.counts_mut(EntityKind::SinglesFrame).placeholders_skipped +=
        parsed.placeholders_skipped;

    for row in parsed.rows {
        let Some(match_id) = context.match_id(row.match_ref) else {
            summary.record_warning(format!(
                "Singles frame {} references unknown match {}; skipped",
                row.number, row.match_ref
            ));
            summary.counts_mut(EntityKind::SinglesFrame).orphaned += 1;
            continue;
        };

        if store.has_singles_frame(match_id, row.number) {
            summary.counts_mut(EntityKind::SinglesFrame).duplicates += 1;
            continue;
        }

        let home_player = resolve(row.home_player_ref, |id| context.player(id), summary, |id| {
            format!("Singles frame {} references unknown home player {}", row.number, id)
        });
        let away_player = resolve(row.away_player_ref, |id| context.player(id), summary, |id| {
            format!("Singles frame {} references unknown away player {}", row.number, id)
        });

        store.create_singles_frame(NewSinglesFrame {
            match_id,
            number: row.number,
            home_player,
            away_player,
            winner: row.winner,
        })?;
        summary.counts_mut(EntityKind::SinglesFrame).imported += 1;
    }
    Ok(())
}

pub(super) fn import_doubles_frames<S: LeagueStore>(
    store: &mut S,
    context: &mut ImportContext,
    summary: &mut ImportSummary,
    parsed: ParsedRows<LegacyDoublesFrame>,
) -> Result<()> {
    summary.counts_mut(EntityKind::DoublesFrame).placeholders_skipped +=
        parsed.placeholders_skipped;

    for row in parsed.rows {
        let Some(match_id) = context.match_id(row.match_ref) else {
            summary.record_warning(format!(
                "Doubles frame {} references unknown match {}; skipped",
                row.number, row.match_ref
            ));
            summary.counts_mut(EntityKind::DoublesFrame).orphaned += 1;
            continue;
        };

        if store.has_doubles_frame(match_id, row.number) {
            summary.counts_mut(EntityKind::DoublesFrame).duplicates += 1;
            continue;
        }

        let mut home_players = [None, None];
        for (slot, reference) in row.home_player_refs.into_iter().enumerate() {
            home_players[slot] = resolve(reference, |id| context.player(id), summary, |id| {
                format!("Doubles frame {} references unknown home player {}", row.number, id)
            });
        }
        let mut away_players = [None, None];
        for (slot, reference) in row.away_player_refs.into_iter().enumerate() {
            away_players[slot] = resolve(reference, |id| context.player(id), summary, |id| {
                format!("Doubles frame {} references unknown away player {}", row.number, id)
            });
        }

        store.create_doubles_frame(NewDoublesFrame {
            match_id,
            number: row.number,
            home_players,
            away_players,
            winner: row.winner,
        })?;
        summary.counts_mut(EntityKind::DoublesFrame).imported += 1;
    }
    Ok(())
}

/// Resolve an optional legacy-id reference through an earlier step's map,
/// recording a warning when the target was never imported
fn resolve<T: Copy>(
    reference: Option<i32>,
    lookup: impl FnOnce(i32) -> Option<T>,
    summary: &mut ImportSummary,
    describe: impl FnOnce(i32) -> String,
) -> Option<T> {
    let legacy_id = reference?;
    let resolved = lookup(legacy_id);
    if resolved.is_none() {
        summary.record_warning(describe(legacy_id));
    }
    resolved
}

/// As [`resolve`], for references carried by name instead of id
fn resolve_named<T: Copy>(
    name: Option<&str>,
    lookup: impl FnOnce(&str) -> Option<T>,
    summary: &mut ImportSummary,
    describe: impl FnOnce(&str) -> String,
) -> Option<T> {
    let name = name?;
    let resolved = lookup(name);
    if resolved.is_none() {
        summary.record_warning(describe(name));
    }
    resolved
}
