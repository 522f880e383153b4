//! Test utilities for the table reader
//!
//! Provides inverse encoders for every field encoding plus a builder that
//! assembles complete synthetic table files, so tests can round-trip real
//! byte layouts instead of hand-maintained hex dumps.

use crate::constants::{
    BLOCK_HEADER_SIZE, BLOCK_SIZE, SIGN_BIT, header_offsets,
};


// =============================================================================
// Inverse Encoders
// =============================================================================

/// Encode a 16-bit integer in the engine's bias encoding
pub fn encode_short(value: i16) -> [u8; 2] {
    let magnitude = value.unsigned_abs();
    let mut bytes = [((magnitude >> 8) as u8) | SIGN_BIT, magnitude as u8];
    if value < 0 {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

/// Encode a 32-bit integer in the engine's bias encoding
pub fn encode_long(value: i32) -> [u8; 4] {
    let magnitude = value.unsigned_abs();
    let mut bytes = [
        ((magnitude >> 24) as u8) | SIGN_BIT,
        (magnitude >> 16) as u8,
        (magnitude >> 8) as u8,
        magnitude as u8,
    ];
    if value < 0 {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

/// Encode a day-count date (day 1 = 0001-01-01)
pub fn encode_date(days: u32) -> [u8; 4] {
    ((days & 0x7fff_ffff) | 0x8000_0000).to_be_bytes()
}

/// Encode a millisecond-from-midnight time
pub fn encode_time(millis: i32) -> [u8; 4] {
    encode_long(millis)
}

/// Encode an f64 in the engine's sign-flipped, byte-reversed layout
pub fn encode_double(value: f64) -> [u8; 8] {
    let mut bytes = value.to_be_bytes();
    if bytes[0] & SIGN_BIT == 0 {
        bytes[0] |= SIGN_BIT;
    } else {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

/// Encode fixed-width text, zero-padded
pub fn encode_text(text: &str, width: usize) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.truncate(width);
    bytes.resize(width, 0);
    bytes
}

/// Encode a logical byte
pub fn encode_logical(value: bool) -> [u8; 1] {
    if value { [0x81] } else { [0x80] }
}

/// Encode a timestamp as date bytes followed by time bytes
pub fn encode_timestamp(days: u32, millis: i32) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    bytes[..4].copy_from_slice(&encode_date(days));
    bytes[4..].copy_from_slice(&encode_time(millis));
    bytes
}

/// An all-zero (null) field of the given width
pub fn zeros(width: usize) -> Vec<u8> {
    vec![0; width]
}

// =============================================================================
// Synthetic Table Builder
// =============================================================================

struct FieldSpec {
    name: String,
    tag: u8,
    size: u8,
}

/// Assembles a complete synthetic table file: header block with field
/// info and a recoverable name region, followed by data blocks laid out
/// exactly as the legacy engine lays them out.
pub struct TableBuilder {
    table_name: Option<String>,
    fields: Vec<FieldSpec>,
    records: Vec<Vec<u8>>,
    claimed_records: Option<u32>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table_name: None,
            fields: Vec::new(),
            records: Vec::new(),
            claimed_records: None,
        }
    }

    /// Embed the table's own name as the leading name-region candidate
    pub fn table_name(mut self, name: &str) -> Self {
        self.table_name = Some(name.to_string());
        self
    }

    /// Declare one field (name, type tag, byte width)
    pub fn field(mut self, name: &str, tag: u8, size: u8) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            tag,
            size,
        });
        self
    }

    /// Override the record count the header claims, for truncation tests
    pub fn claimed_records(mut self, count: u32) -> Self {
        self.claimed_records = Some(count);
        self
    }

    /// Append one record from per-field byte slices
    pub fn push_record(&mut self, parts: &[&[u8]]) -> &mut Self {
        assert_eq!(
            parts.len(),
            self.fields.len(),
            "record must supply bytes for every declared field"
        );
        let mut record = Vec::new();
        for (part, field) in parts.iter().zip(&self.fields) {
            assert_eq!(
                part.len(),
                field.size as usize,
                "field '{}' bytes must match its declared width",
                field.name
            );
            record.extend_from_slice(part);
        }
        self.records.push(record);
        self
    }

    pub fn record_size(&self) -> usize {
        self.fields.iter().map(|f| f.size as usize).sum()
    }

    /// Assemble the file bytes
    pub fn build(&self) -> Vec<u8> {
        let record_size = self.record_size();
        let records_per_block = if record_size == 0 {
            1
        } else {
            ((BLOCK_SIZE - BLOCK_HEADER_SIZE) / record_size).max(1)
        };
        let blocks = self.records.len().div_ceil(records_per_block);
        let mut data = vec![0u8; BLOCK_SIZE + blocks * BLOCK_SIZE];

        // Fixed numeric header fields
        data[header_offsets::RECORD_SIZE..header_offsets::RECORD_SIZE + 2]
            .copy_from_slice(&(record_size as u16).to_le_bytes());
        let claimed = self
            .claimed_records
            .unwrap_or(self.records.len() as u32);
        data[header_offsets::RECORD_COUNT..header_offsets::RECORD_COUNT + 4]
            .copy_from_slice(&claimed.to_le_bytes());
        data[header_offsets::FIELD_COUNT] = self.fields.len() as u8;

        // Field info: type tags then size bytes
        let mut cursor = header_offsets::FIELD_INFO;
        for field in &self.fields {
            data[cursor] = field.tag;
            cursor += 1;
        }
        for field in &self.fields {
            data[cursor] = field.size;
            cursor += 1;
        }

        // Name region: table name first, then field names, zero-separated
        let mut cursor = header_offsets::NAME_SCAN_START;
        if let Some(table_name) = &self.table_name {
            cursor = write_name(&mut data, cursor, table_name);
        }
        for field in &self.fields {
            cursor = write_name(&mut data, cursor, &field.name);
        }

        // Records into chained data blocks
        for (index, record) in self.records.iter().enumerate() {
            let block = index / records_per_block;
            let slot = index % records_per_block;
            let offset =
                BLOCK_SIZE + block * BLOCK_SIZE + BLOCK_HEADER_SIZE + slot * record_size;
            data[offset..offset + record_size].copy_from_slice(record);
        }

        data
    }
}

fn write_name(data: &mut [u8], cursor: usize, name: &str) -> usize {
    let bytes = name.as_bytes();
    assert!(
        cursor + bytes.len() + 1 < BLOCK_SIZE,
        "name region overflowed the header block"
    );
    data[cursor..cursor + bytes.len()].copy_from_slice(bytes);
    cursor + bytes.len() + 1
}
