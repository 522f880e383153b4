//! Source directory scanner for legacy table files
//!
//! This module inspects a directory for the table files an import run
//! expects, reporting presence and size per entity kind without parsing
//! any file content. Callers use the report to decide whether an import
//! is worth attempting and where each table actually lives (legacy
//! installations sometimes keep the data files in a subdirectory).

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::app::models::EntityKind;
use crate::config::ScanOptions;
use crate::{Error, Result};

/// Presence of one expected table file
#[derive(Debug, Clone, Serialize)]
pub struct TablePresence {
    /// Entity kind this table holds
    pub kind: EntityKind,
    /// Conventional file name the scanner looked for
    pub file_name: String,
    /// Where the file was found, if anywhere
    pub path: Option<PathBuf>,
    /// File size in bytes, when found
    pub size_bytes: Option<u64>,
}

impl TablePresence {
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}

/// What a scan learned about a source directory
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub source_dir: PathBuf,
    /// One entry per entity kind, in import order
    pub tables: Vec<TablePresence>,
}

impl ScanReport {
    /// The discovered path for one kind's table file
    pub fn path(&self, kind: EntityKind) -> Option<&Path> {
        self.tables
            .iter()
            .find(|table| table.kind == kind)
            .and_then(|table| table.path.as_deref())
    }

    /// How many of the expected files were found
    pub fn present_count(&self) -> usize {
        self.tables.iter().filter(|table| table.is_present()).count()
    }

    /// Whether an import run would have anything at all to do
    pub fn is_importable(&self) -> bool {
        self.present_count() > 0
    }
}

/// Scan a directory for the expected legacy table files.
///
/// File names are matched case-insensitively against the fixed naming
/// convention. When several candidates match one kind (nested copies of
/// the data directory, say) the first one encountered wins.
pub fn scan_source_dir(source_dir: &Path, options: &ScanOptions) -> Result<ScanReport> {
    if !source_dir.is_dir() {
        return Err(Error::file_not_found(source_dir.display().to_string()));
    }

    let mut tables: Vec<TablePresence> = EntityKind::ALL
        .iter()
        .map(|&kind| TablePresence {
            kind,
            file_name: kind.file_name(),
            path: None,
            size_bytes: None,
        })
        .collect();

    let mut walker = WalkDir::new(source_dir);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!("Error walking directory {}: {}", source_dir.display(), error);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        for table in tables.iter_mut() {
            if table.path.is_none() && table.kind.matches_file_name(name) {
                table.size_bytes = entry.metadata().ok().map(|meta| meta.len());
                table.path = Some(entry.path().to_path_buf());
                debug!("Found {} table at {}", table.kind, entry.path().display());
            }
        }
    }

    let report = ScanReport {
        source_dir: source_dir.to_path_buf(),
        tables,
    };
    debug!(
        "Scanned {}: {} of {} expected files present",
        source_dir.display(),
        report.present_count(),
        EntityKind::ALL.len()
    );
    Ok(report)
}
