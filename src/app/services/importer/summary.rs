//! Structured results of one import run

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::models::EntityKind;

/// Counters for one entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    /// Entities newly created in the target store
    pub imported: usize,
    /// Rows matching an already-stored entity by natural key
    pub duplicates: usize,
    /// Rows skipped because a required reference was never imported
    pub orphaned: usize,
    /// Placeholder rows dropped by the parser
    pub placeholders_skipped: usize,
}

/// Everything one import run reports back to its caller.
///
/// The summary is always returned, partial failure included; `success`
/// means no step recorded a hard error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub success: bool,
    /// Whether the run was cancelled before completing every step
    pub cancelled: bool,
    pub source_dir: PathBuf,
    /// Per-kind counters, in import order
    pub counts: IndexMap<EntityKind, KindCounts>,
    pub warnings: Vec<String>,
    /// Warnings dropped once the configured cap was reached
    pub warnings_truncated: usize,
    pub errors: Vec<String>,
    /// Earliest date seen on a newly imported match
    pub earliest_date: Option<NaiveDate>,
    /// Latest date seen on a newly imported match
    pub latest_date: Option<NaiveDate>,
    #[serde(skip)]
    warn_limit: Option<usize>,
}

impl ImportSummary {
    pub fn new(source_dir: &Path, warn_limit: Option<usize>) -> Self {
        let counts = EntityKind::ALL
            .iter()
            .map(|&kind| (kind, KindCounts::default()))
            .collect();
        Self {
            success: false,
            cancelled: false,
            source_dir: source_dir.to_path_buf(),
            counts,
            warnings: Vec::new(),
            warnings_truncated: 0,
            errors: Vec::new(),
            earliest_date: None,
            latest_date: None,
            warn_limit,
        }
    }

    /// Counters for one kind
    pub fn counts(&self, kind: EntityKind) -> KindCounts {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    pub(crate) fn counts_mut(&mut self, kind: EntityKind) -> &mut KindCounts {
        self.counts.entry(kind).or_default()
    }

    /// Record a non-fatal warning, honoring the configured cap
    pub fn record_warning(&mut self, message: impl Into<String>) {
        match self.warn_limit {
            Some(limit) if self.warnings.len() >= limit => {
                self.warnings_truncated += 1;
            }
            _ => self.warnings.push(message.into()),
        }
    }

    /// Record a hard error; the run's `success` flag will be false
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Fold a newly imported match date into the observed range
    pub(crate) fn record_date(&mut self, date: NaiveDate) {
        self.earliest_date = Some(self.earliest_date.map_or(date, |current| current.min(date)));
        self.latest_date = Some(self.latest_date.map_or(date, |current| current.max(date)));
    }

    /// Compute the final success flag
    pub(crate) fn finalize(&mut self) {
        self.success = self.errors.is_empty();
    }

    pub fn total_imported(&self) -> usize {
        self.counts.values().map(|counts| counts.imported).sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.counts.values().map(|counts| counts.duplicates).sum()
    }

    pub fn total_orphaned(&self) -> usize {
        self.counts.values().map(|counts| counts.orphaned).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len() + self.warnings_truncated
    }
}
