//! Fixed-layout table header parsing and field-name recovery
//!
//! The legacy engine keeps its record geometry at fixed byte offsets in the
//! first 2048-byte block. Field names are not stored in a structured way we
//! were ever able to document, so they are recovered heuristically by
//! scanning the tail of the header block for printable runs.

use crate::constants::{
    DATA_START_OFFSET, MIN_HEADER_LEN, NAME_MAX_LEN, NAME_MIN_LEN, NAME_REJECT_SUBSTRING,
    TABLE_NAME_SUFFIX, header_offsets, is_printable, synthetic_field_name,
};
use crate::{Error, Result};

use super::fields::FieldType;

/// Parsed header of one legacy table file.
///
/// Constructed once per file and immutable afterwards. `field_types` and
/// `field_sizes` can be shorter than `field_count` when the file ends
/// inside the field-info region; `field_names` is always padded to
/// `field_count` entries with synthetic `FieldN` labels because name
/// recovery is best-effort by design.
#[derive(Debug, Clone, PartialEq)]
pub struct TableHeader {
    /// Bytes per fixed-width record
    pub record_size: u16,

    /// Total logical records the header claims; the data region may hold
    /// fewer when the file is truncated
    pub record_count: u32,

    /// Number of fields per record
    pub field_count: u8,

    /// Per-field type tags, in on-disk field order
    pub field_types: Vec<FieldType>,

    /// Per-field widths in bytes, in on-disk field order
    pub field_sizes: Vec<u8>,

    /// Recovered (or synthesized) field names, one per field
    pub field_names: Vec<String>,

    /// The table's own name when the name scan recovered one
    pub table_name: Option<String>,
}

impl TableHeader {
    /// Parse the header out of full file bytes.
    ///
    /// Fails with [`Error::CorruptHeader`] only when the file cannot hold
    /// the fixed numeric fields; short field-info or name regions degrade
    /// gracefully instead.
    pub fn parse(data: &[u8], label: &str) -> Result<TableHeader> {
        if data.len() < MIN_HEADER_LEN {
            return Err(Error::corrupt_header(
                label,
                format!(
                    "file is {} bytes, shorter than the {} byte fixed header",
                    data.len(),
                    MIN_HEADER_LEN
                ),
            ));
        }

        let record_size = u16::from_le_bytes([
            data[header_offsets::RECORD_SIZE],
            data[header_offsets::RECORD_SIZE + 1],
        ]);
        let record_count = u32::from_le_bytes([
            data[header_offsets::RECORD_COUNT],
            data[header_offsets::RECORD_COUNT + 1],
            data[header_offsets::RECORD_COUNT + 2],
            data[header_offsets::RECORD_COUNT + 3],
        ]);
        let field_count = data[header_offsets::FIELD_COUNT];

        let field_types = read_info_bytes(data, header_offsets::FIELD_INFO, field_count)
            .iter()
            .map(|&tag| FieldType::from_tag(tag))
            .collect();
        let field_sizes =
            read_info_bytes(data, header_offsets::FIELD_INFO + field_count as usize, field_count)
                .to_vec();

        let (table_name, mut field_names) = recover_names(data, field_count as usize);
        for index in field_names.len()..field_count as usize {
            field_names.push(synthetic_field_name(index));
        }

        Ok(TableHeader {
            record_size,
            record_count,
            field_count,
            field_types,
            field_sizes,
            field_names,
            table_name,
        })
    }
}

/// Slice up to `count` bytes at `start`, clamped to the available data
fn read_info_bytes(data: &[u8], start: usize, count: u8) -> &[u8] {
    if start >= data.len() {
        return &[];
    }
    let end = (start + count as usize).min(data.len());
    &data[start..end]
}

/// Scan the header tail for printable runs and filter them down to
/// plausible field names.
///
/// Returns the table's own name (a leading candidate ending in ".DB")
/// separately from the field-name candidates, capped at `field_count`.
fn recover_names(data: &[u8], field_count: usize) -> (Option<String>, Vec<String>) {
    let scan_end = DATA_START_OFFSET.min(data.len());
    let scan_start = header_offsets::NAME_SCAN_START.min(scan_end);

    let mut candidates = Vec::new();
    let mut current = String::new();
    for &byte in &data[scan_start..scan_end] {
        if is_printable(byte) {
            current.push(byte as char);
        } else if !current.is_empty() {
            push_candidate(&mut candidates, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_candidate(&mut candidates, current);
    }

    let mut names = candidates.into_iter();
    let mut table_name = None;
    let mut field_names = Vec::with_capacity(field_count);

    if let Some(first) = names.next() {
        if first.to_ascii_lowercase().ends_with(TABLE_NAME_SUFFIX) {
            table_name = Some(first);
        } else {
            field_names.push(first);
        }
    }
    field_names.extend(names.take(field_count.saturating_sub(field_names.len())));
    field_names.truncate(field_count);

    (table_name, field_names)
}

/// Keep a candidate only when it looks like a name the legacy tool wrote
fn push_candidate(candidates: &mut Vec<String>, candidate: String) {
    let trimmed = candidate.trim();
    if trimmed.len() < NAME_MIN_LEN || trimmed.len() > NAME_MAX_LEN {
        return;
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return;
    }
    if trimmed.to_ascii_lowercase().contains(NAME_REJECT_SUBSTRING) {
        return;
    }
    candidates.push(trimmed.to_string());
}
