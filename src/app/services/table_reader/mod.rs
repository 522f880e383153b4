//! Reader for the legacy engine's binary table files
//!
//! This module decodes the proprietary on-disk layout the legacy desktop
//! league manager stored its tables in: a fixed-layout header block followed
//! by chained 2048-byte data blocks of fixed-width records. The reader is
//! deliberately forgiving — truncated files end the record stream early, and
//! header name recovery is best-effort — because real source directories are
//! frequently copied off half-dead disks.
//!
//! ## Architecture
//!
//! - [`header`] - Fixed header fields and heuristic field-name recovery
//! - [`records`] - Lazy block-walking record iterator and the raw record map
//! - [`fields`] - Per-type byte decoding of the engine's bias encodings
//!
//! ## Usage
//!
//! ```rust
//! use frameleague_importer::app::services::table_reader::TableFile;
//!
//! # fn example(bytes: Vec<u8>) -> frameleague_importer::Result<()> {
//! let table = TableFile::parse(bytes, "TEAM.DB")?;
//! for record in table.records() {
//!     if let Some(name) = record.text(&["Team Name", "Team"]) {
//!         println!("{}", name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod header;
pub mod records;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fields::{FieldType, FieldValue, decode_field};
pub use header::TableHeader;
pub use records::{RawRecord, RecordIter};

use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// One fully loaded legacy table file: its bytes plus the parsed header.
///
/// Owns the file content so record iterators can borrow slices without
/// copying; [`TableFile::records`] can be called repeatedly for a fresh
/// pass over the data.
#[derive(Debug, Clone)]
pub struct TableFile {
    data: Vec<u8>,
    header: TableHeader,
}

impl TableFile {
    /// Read and parse a table file from disk
    pub async fn open(path: &Path) -> Result<TableFile> {
        let label = path.display().to_string();
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read table file '{}'", label), e))?;

        let table = Self::parse(data, &label)?;
        debug!(
            "Opened {}: {} fields, {} records ({} bytes)",
            label,
            table.header.field_count,
            table.header.record_count,
            table.data.len()
        );
        Ok(table)
    }

    /// Parse already-loaded table bytes; `label` names the source in errors
    pub fn parse(data: Vec<u8>, label: &str) -> Result<TableFile> {
        let header = TableHeader::parse(&data, label)?;
        Ok(TableFile { data, header })
    }

    /// The parsed table header
    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    /// A fresh lazy iterator over the table's records
    pub fn records(&self) -> RecordIter<'_> {
        RecordIter::new(&self.data, &self.header)
    }
}
