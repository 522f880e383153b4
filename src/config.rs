//! Configuration for import runs and source scanning.
//!
//! Provides the options structures threaded through the import
//! orchestrator and the source directory scanner, with builder-style
//! setters for embedding callers.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Options controlling one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Persist the target store after every entity-kind step instead of
    /// once at the end of the run
    pub persist_each_step: bool,

    /// Maximum number of warning strings retained on the summary; excess
    /// warnings are still counted. `None` keeps everything.
    pub warn_limit: Option<usize>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            persist_each_step: false,
            warn_limit: Some(500),
        }
    }
}

impl ImportOptions {
    /// Persist after every entity-kind step
    pub fn with_persist_each_step(mut self, persist_each_step: bool) -> Self {
        self.persist_each_step = persist_each_step;
        self
    }

    /// Cap or uncap the number of retained warning strings
    pub fn with_warn_limit(mut self, warn_limit: Option<usize>) -> Self {
        self.warn_limit = warn_limit;
        self
    }

    /// Validate option combinations
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.warn_limit {
            return Err(Error::configuration(
                "warn_limit must be at least 1 when set; use None to keep all warnings",
            ));
        }
        Ok(())
    }
}

/// Options controlling source directory scans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Descend into subdirectories when locating table files
    pub recursive: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { recursive: true }
    }
}

impl ScanOptions {
    /// Restrict or widen the scan to subdirectories
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}
