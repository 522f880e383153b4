//! Import pipeline orchestration for legacy league data
//!
//! This module drives a complete import run: it locates the legacy table
//! files, parses each one into staging rows, and merges those rows into a
//! target [`LeagueStore`] season in strict dependency order (divisions,
//! venues, teams, players, matches, singles frames, doubles frames), so
//! every reference a later step resolves was mapped by an earlier one.
//!
//! A run never aborts on bad data. Missing files, unreadable tables, and
//! unresolvable references are recorded on the [`ImportSummary`] and the
//! pipeline moves on to the next step; only a failed persist stops the run
//! early. Re-running an import against the same store is safe because every
//! step matches on natural keys before creating anything.
//!
//! # Architecture
//!
//! - [`context`] - Legacy-id and name maps threaded between steps
//! - [`steps`] - The seven merge/create step functions
//! - [`summary`] - Per-kind counters, warnings, and the season date range
//! - [`progress`] - Step notification hook for CLI progress reporting
//!
//! # Example Usage
//!
//! ```rust
//! use frameleague_importer::app::adapters::memory_store::MemoryStore;
//! use frameleague_importer::app::services::importer::{LegacyImporter, SilentProgress};
//!
//! # async fn example() -> frameleague_importer::Result<()> {
//! let mut store = MemoryStore::new();
//! let season = store.create_season("2003-04");
//!
//! let importer = LegacyImporter::new("/path/to/legacy/data");
//! let summary = importer.run(&mut store, season, &mut SilentProgress).await;
//!
//! println!("Imported {} entities", summary.total_imported());
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod progress;
pub mod steps;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use context::ImportContext;
pub use progress::{ProgressSink, SilentProgress};
pub use summary::{ImportSummary, KindCounts};

use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::Result;
use crate::app::adapters::store::{LeagueStore, SeasonId};
use crate::app::models::EntityKind;
use crate::app::services::entity_parsers::{
    parse_divisions, parse_doubles_frames, parse_matches, parse_players, parse_singles_frames,
    parse_teams, parse_venues,
};
use crate::app::services::source_scanner::scan_source_dir;
use crate::app::services::table_reader::TableFile;
use crate::config::{ImportOptions, ScanOptions};

/// Orchestrator for one legacy import run.
///
/// Construct with the source directory, optionally adjust [`ImportOptions`]
/// and attach a [`CancellationToken`], then call [`LegacyImporter::run`]
/// against a store and season. The importer holds no store state itself, so
/// one instance can run against several seasons in turn.
#[derive(Debug, Clone)]
pub struct LegacyImporter {
    /// Directory holding the legacy table files
    source_dir: PathBuf,
    /// Run options
    options: ImportOptions,
    /// Cooperative cancellation, checked between steps
    cancellation: CancellationToken,
}

impl LegacyImporter {
    /// Create an importer for the given source directory with default options
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            options: ImportOptions::default(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Replace the run options
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a cancellation token; cancelling it stops the run at the next
    /// step boundary
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// The configured source directory
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Run the full import pipeline against one season of the store.
    ///
    /// Always returns a summary; data problems are recorded on it rather
    /// than surfaced as errors. The summary's `success` flag is false when
    /// any step failed outright or a persist failed.
    pub async fn run<S: LeagueStore>(
        &self,
        store: &mut S,
        season: SeasonId,
        progress: &mut dyn ProgressSink,
    ) -> ImportSummary {
        let mut summary = ImportSummary::new(&self.source_dir, self.options.warn_limit);
        let mut context = ImportContext::new(season);

        info!("Starting legacy import from {}", self.source_dir.display());

        let report = match scan_source_dir(&self.source_dir, &ScanOptions::default()) {
            Ok(report) => report,
            Err(error) => {
                summary.record_error(format!("Cannot scan source directory: {}", error));
                summary.finalize();
                return summary;
            }
        };
        if !report.is_importable() {
            summary.record_error(format!(
                "No legacy table files found in {}",
                self.source_dir.display()
            ));
            summary.finalize();
            return summary;
        }

        let mut persist_failed = false;
        for (index, kind) in EntityKind::ALL.into_iter().enumerate() {
            if self.cancellation.is_cancelled() {
                info!("Import cancelled before the {} step", kind);
                summary.record_warning(format!("Import cancelled before the {} step", kind));
                summary.cancelled = true;
                break;
            }

            progress.step(kind.step_name(), index + 1, EntityKind::ALL.len());

            if let Err(error) = self
                .run_step(kind, report.path(kind), store, &mut context, &mut summary)
                .await
            {
                summary.record_error(format!("{} step failed: {}", kind, error));
            }

            if self.options.persist_each_step {
                if let Err(error) = store.persist() {
                    summary.record_error(format!(
                        "Failed to persist after the {} step: {}",
                        kind, error
                    ));
                    persist_failed = true;
                    break;
                }
            }
        }

        // With per-step persistence every completed step is already on disk
        if !persist_failed && !self.options.persist_each_step {
            if let Err(error) = store.persist() {
                summary.record_error(format!("Failed to persist imported entities: {}", error));
            }
        }

        summary.finalize();
        info!(
            "Import finished: {} imported, {} duplicates, {} warnings",
            summary.total_imported(),
            summary.total_duplicates(),
            summary.warning_count()
        );
        summary
    }

    /// Run one entity-kind step: open the table, parse it, merge the rows.
    ///
    /// A missing table file is a warning, not an error; the step is skipped
    /// so later tables can still contribute what they reference.
    async fn run_step<S: LeagueStore>(
        &self,
        kind: EntityKind,
        path: Option<&Path>,
        store: &mut S,
        context: &mut ImportContext,
        summary: &mut ImportSummary,
    ) -> Result<()> {
        let Some(path) = path else {
            debug!("No {} table file found; skipping step", kind.file_name());
            summary.record_warning(format!(
                "{} not found in {}; step skipped",
                kind.file_name(),
                self.source_dir.display()
            ));
            return Ok(());
        };

        let table = TableFile::open(path).await?;
        match kind {
            EntityKind::Division => {
                steps::import_divisions(store, context, summary, parse_divisions(table.records()))?
            }
            EntityKind::Venue => {
                steps::import_venues(store, context, summary, parse_venues(table.records()))?
            }
            EntityKind::Team => {
                steps::import_teams(store, context, summary, parse_teams(table.records()))?
            }
            EntityKind::Player => {
                steps::import_players(store, context, summary, parse_players(table.records()))?
            }
            EntityKind::Match => {
                steps::import_matches(store, context, summary, parse_matches(table.records()))?
            }
            EntityKind::SinglesFrame => steps::import_singles_frames(
                store,
                context,
                summary,
                parse_singles_frames(table.records()),
            )?,
            EntityKind::DoublesFrame => steps::import_doubles_frames(
                store,
                context,
                summary,
                parse_doubles_frames(table.records()),
            )?,
        }

        let counts = summary.counts(kind);
        info!(
            "{}: {} imported, {} duplicates, {} orphaned, {} placeholders skipped",
            kind, counts.imported, counts.duplicates, counts.orphaned, counts.placeholders_skipped
        );
        Ok(())
    }
}
