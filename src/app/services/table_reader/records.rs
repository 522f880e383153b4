//! Lazy record iteration over block-chained table data
//!
//! Data lives in 2048-byte blocks starting after the header block, each
//! with a 6-byte block header followed by as many fixed-width records as
//! fit. The iterator stops early on truncation instead of erroring; a
//! half-copied file is normal input, not a failure.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::constants::{BLOCK_HEADER_SIZE, BLOCK_SIZE, DATA_START_OFFSET};

use super::fields::{FieldValue, decode_field};
use super::header::TableHeader;

// =============================================================================
// Raw Records
// =============================================================================

/// One decoded record: an ordered mapping from field name to value,
/// preserving on-disk field order. Fields whose bytes were all zero are
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: IndexMap<String, FieldValue>,
}

impl RawRecord {
    pub(crate) fn insert(&mut self, name: String, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Case-insensitive lookup trying each alias in priority order.
    ///
    /// The legacy tool renamed columns across releases, so parsers pass
    /// every historical spelling they know about.
    pub fn lookup(&self, aliases: &[&str]) -> Option<&FieldValue> {
        for alias in aliases {
            for (name, value) in &self.values {
                if name.eq_ignore_ascii_case(alias) {
                    return Some(value);
                }
            }
        }
        None
    }

    /// Alias lookup narrowed to a text value
    pub fn text(&self, aliases: &[&str]) -> Option<&str> {
        self.lookup(aliases).and_then(FieldValue::as_text)
    }

    /// Alias lookup narrowed to an integer value
    pub fn integer(&self, aliases: &[&str]) -> Option<i64> {
        self.lookup(aliases).and_then(FieldValue::as_integer)
    }

    /// Alias lookup narrowed to a date value
    pub fn date(&self, aliases: &[&str]) -> Option<NaiveDate> {
        self.lookup(aliases).and_then(FieldValue::as_date)
    }

    /// Alias lookup narrowed to a boolean value
    pub fn boolean(&self, aliases: &[&str]) -> Option<bool> {
        self.lookup(aliases).and_then(FieldValue::as_boolean)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate fields in on-disk order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}

// =============================================================================
// Record Iteration
// =============================================================================

/// Records that fit in one data block alongside its 6-byte block header
pub fn records_per_block(record_size: u16) -> usize {
    if record_size == 0 {
        return 0;
    }
    ((BLOCK_SIZE - BLOCK_HEADER_SIZE) / record_size as usize).max(1)
}

/// Lazy iterator over a table's records.
///
/// Yields at most `record_count` records and never reads past the end of
/// the buffer: the first record whose byte range would overrun ends the
/// iteration for good (truncated file).
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    data: &'a [u8],
    header: &'a TableHeader,
    records_per_block: usize,
    next_index: u32,
}

impl<'a> RecordIter<'a> {
    pub fn new(data: &'a [u8], header: &'a TableHeader) -> Self {
        let records_per_block = records_per_block(header.record_size);
        let next_index = if records_per_block == 0 {
            // Zero-width records cannot be sliced; treat as empty
            header.record_count
        } else {
            0
        };

        RecordIter {
            data,
            header,
            records_per_block,
            next_index,
        }
    }

    /// Absolute byte offset of logical record `index`
    fn record_offset(&self, index: u32) -> usize {
        let block = index as usize / self.records_per_block;
        let slot = index as usize % self.records_per_block;
        DATA_START_OFFSET
            + block * BLOCK_SIZE
            + BLOCK_HEADER_SIZE
            + slot * self.header.record_size as usize
    }

    /// Decode the fields of one record slice
    fn decode_record(&self, record: &[u8]) -> RawRecord {
        let mut raw = RawRecord::default();
        let mut offset = 0usize;

        for index in 0..self.header.field_count as usize {
            // Field info can be shorter than field_count on short headers
            let (Some(&field_type), Some(&size)) = (
                self.header.field_types.get(index),
                self.header.field_sizes.get(index),
            ) else {
                break;
            };

            let size = size as usize;
            if offset + size > record.len() {
                // Partial record: keep what decoded so far
                break;
            }

            if let Some(value) = decode_field(&record[offset..offset + size], field_type) {
                let name = self
                    .header
                    .field_names
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| crate::constants::synthetic_field_name(index));
                raw.insert(name, value);
            }
            offset += size;
        }

        raw
    }
}

impl Iterator for RecordIter<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        if self.next_index >= self.header.record_count {
            return None;
        }

        let offset = self.record_offset(self.next_index);
        let record_size = self.header.record_size as usize;
        if offset + record_size > self.data.len() {
            // Truncated file: normal end of data, nothing more to yield
            self.next_index = self.header.record_count;
            return None;
        }

        self.next_index += 1;
        Some(self.decode_record(&self.data[offset..offset + record_size]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.header.record_count - self.next_index) as usize;
        (0, Some(remaining))
    }
}
