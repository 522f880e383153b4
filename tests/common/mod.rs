//! Shared fixture support for integration tests
//!
//! Builds real legacy-format table files on disk: a header block carrying
//! the fixed numeric fields, field info, and a recoverable name region,
//! followed by chained 2048-byte data blocks of fixed-width records.

// Each integration test binary uses its own subset of these helpers
#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::Path;

pub const BLOCK_SIZE: usize = 2048;
pub const BLOCK_HEADER_SIZE: usize = 6;
const SIGN_BIT: u8 = 0x80;

// Type tags as the legacy engine writes them
pub const TAG_TEXT: u8 = 1;
pub const TAG_DATE: u8 = 2;
pub const TAG_SHORT: u8 = 3;
pub const TAG_LONG: u8 = 4;
pub const TAG_NUMBER: u8 = 6;
pub const TAG_LOGICAL: u8 = 9;

// =============================================================================
// Field encoders (inverse of the importer's decoders)
// =============================================================================

pub fn encode_short(value: i16) -> Vec<u8> {
    let magnitude = value.unsigned_abs();
    let mut bytes = vec![((magnitude >> 8) as u8) | SIGN_BIT, magnitude as u8];
    if value < 0 {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes
}

pub fn encode_long(value: i32) -> Vec<u8> {
    let magnitude = value.unsigned_abs();
    let mut bytes = vec![
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

pub fn encode_double(value: f64) -> Vec<u8> {
    let mut bytes = value.to_be_bytes();
    if bytes[0] & SIGN_BIT == 0 {
        bytes[0] |= SIGN_BIT;
    } else {
        for b in &mut bytes {
            *b = !*b;
        }
    }
    bytes.to_vec()
}

pub fn encode_date(date: NaiveDate) -> Vec<u8> {
    let days = date.num_days_from_ce() as u32;
    (((days) & 0x7fff_ffff) | 0x8000_0000).to_be_bytes().to_vec()
}

pub fn encode_text(text: &str, width: usize) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.truncate(width);
    bytes.resize(width, 0);
    bytes
}

pub fn encode_logical(value: bool) -> Vec<u8> {
    vec![if value { 0x81 } else { 0x80 }]
}

pub fn zeros(width: usize) -> Vec<u8> {
    vec![0; width]
}

// =============================================================================
// Table file builder
// =============================================================================

struct FieldSpec {
    name: String,
    tag: u8,
    size: u8,
}

/// Assembles one complete table file in the legacy on-disk layout
pub struct TableFixture {
    table_name: Option<String>,
    fields: Vec<FieldSpec>,
    records: Vec<Vec<u8>>,
}

impl TableFixture {
    pub fn new() -> Self {
        Self {
            table_name: None,
            fields: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn table_name(mut self, name: &str) -> Self {
        self.table_name = Some(name.to_string());
        self
    }

    pub fn field(mut self, name: &str, tag: u8, size: u8) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            tag,
            size,
        });
        self
    }

    pub fn record(&mut self, parts: &[Vec<u8>]) -> &mut Self {
        assert_eq!(parts.len(), self.fields.len(), "one byte slice per field");
        let mut record = Vec::new();
        for (part, field) in parts.iter().zip(&self.fields) {
            assert_eq!(part.len(), field.size as usize, "field width mismatch");
            record.extend_from_slice(part);
        }
        self.records.push(record);
        self
    }

    pub fn record_size(&self) -> usize {
        self.fields.iter().map(|f| f.size as usize).sum()
    }

    pub fn build(&self) -> Vec<u8> {
        let record_size = self.record_size();
        let records_per_block = ((BLOCK_SIZE - BLOCK_HEADER_SIZE) / record_size).max(1);
        let blocks = self.records.len().div_ceil(records_per_block).max(1);
        let mut data = vec![0u8; BLOCK_SIZE + blocks * BLOCK_SIZE];

        data[0..2].copy_from_slice(&(record_size as u16).to_le_bytes());
        data[6..10].copy_from_slice(&(self.records.len() as u32).to_le_bytes());
        data[33] = self.fields.len() as u8;

        let mut cursor = 78;
        for field in &self.fields {
            data[cursor] = field.tag;
            cursor += 1;
        }
        for field in &self.fields {
            data[cursor] = field.size;
            cursor += 1;
        }

        let mut cursor = 200;
        if let Some(table_name) = &self.table_name {
            cursor = write_name(&mut data, cursor, table_name);
        }
        for field in &self.fields {
            cursor = write_name(&mut data, cursor, &field.name);
        }

        for (index, record) in self.records.iter().enumerate() {
            let block = index / records_per_block;
            let slot = index % records_per_block;
            let offset = BLOCK_SIZE + block * BLOCK_SIZE + BLOCK_HEADER_SIZE + slot * record_size;
            data[offset..offset + record_size].copy_from_slice(record);
        }

        data
    }

    pub fn write(&self, dir: &Path, file_name: &str) {
        fs::write(dir.join(file_name), self.build()).unwrap();
    }
}

fn write_name(data: &mut [u8], cursor: usize, name: &str) -> usize {
    let bytes = name.as_bytes();
    assert!(cursor + bytes.len() + 1 < BLOCK_SIZE, "name region overflow");
    data[cursor..cursor + bytes.len()].copy_from_slice(bytes);
    cursor + bytes.len() + 1
}

// =============================================================================
// Canned league fixtures
// =============================================================================

pub fn match_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 5, 17).unwrap()
}

/// Write the complete seven-table sample league into `dir`:
/// one division, one venue, one team, one player, one match, one singles
/// frame won by the home side, and one doubles frame won by the away side.
pub fn write_sample_league(dir: &Path) {
    let mut division = TableFixture::new()
        .table_name("DIVISION.DB")
        .field("Division No", TAG_LONG, 4)
        .field("Division Name", TAG_TEXT, 20);
    division.record(&[encode_long(1), encode_text("Premier", 20)]);
    division.write(dir, "DIVISION.DB");

    let mut venue = TableFixture::new()
        .table_name("VENUE.DB")
        .field("Venue No", TAG_LONG, 4)
        .field("Venue Name", TAG_TEXT, 20)
        .field("Address 1", TAG_TEXT, 20)
        .field("Address 2", TAG_TEXT, 20);
    venue.record(&[
        encode_long(1),
        encode_text("Club A", 20),
        encode_text("1 High Street", 20),
        encode_text("Oldtown", 20),
    ]);
    venue.write(dir, "VENUE.DB");

    let mut team = TableFixture::new()
        .table_name("TEAM.DB")
        .field("Team No", TAG_LONG, 4)
        .field("Team Name", TAG_TEXT, 20)
        .field("Venue No", TAG_SHORT, 2)
        .field("Division No", TAG_SHORT, 2)
        .field("Won", TAG_SHORT, 2)
        .field("Points", TAG_NUMBER, 8);
    team.record(&[
        encode_long(1),
        encode_text("RED LION", 20),
        encode_short(1),
        encode_short(1),
        encode_short(11),
        encode_double(23.5),
    ]);
    team.write(dir, "TEAM.DB");

    let mut player = TableFixture::new()
        .table_name("PLAYER.DB")
        .field("Player No", TAG_LONG, 4)
        .field("Player Name", TAG_TEXT, 30)
        .field("Team No", TAG_SHORT, 2)
        .field("Rating", TAG_SHORT, 2);
    player.record(&[
        encode_long(1),
        encode_text("JOHN SMITH", 30),
        encode_short(1),
        encode_short(87),
    ]);
    player.write(dir, "PLAYER.DB");

    let mut fixture = TableFixture::new()
        .table_name("MATCH.DB")
        .field("Match No", TAG_LONG, 4)
        .field("Home Team", TAG_SHORT, 2)
        .field("Away Team", TAG_SHORT, 2)
        .field("Division", TAG_TEXT, 20)
        .field("Match Date", TAG_DATE, 4);
    fixture.record(&[
        encode_long(1),
        encode_short(1),
        encode_short(1),
        encode_text("Premier", 20),
        encode_date(match_date()),
    ]);
    fixture.write(dir, "MATCH.DB");

    let mut singles = TableFixture::new()
        .table_name("FRAME.DB")
        .field("Match No", TAG_LONG, 4)
        .field("Frame No", TAG_SHORT, 2)
        .field("Home Player", TAG_SHORT, 2)
        .field("Away Player", TAG_SHORT, 2)
        .field("Winner", TAG_TEXT, 6);
    singles.record(&[
        encode_long(1),
        encode_short(1),
        encode_short(1),
        zeros(2),
        encode_text("Home", 6),
    ]);
    singles.write(dir, "FRAME.DB");

    let mut doubles = TableFixture::new()
        .table_name("DOUBLES.DB")
        .field("Match No", TAG_LONG, 4)
        .field("Frame No", TAG_SHORT, 2)
        .field("Home Player 1", TAG_SHORT, 2)
        .field("Home Player 2", TAG_SHORT, 2)
        .field("Away Player 1", TAG_SHORT, 2)
        .field("Away Player 2", TAG_SHORT, 2)
        .field("Winner", TAG_TEXT, 6);
    doubles.record(&[
        encode_long(1),
        encode_short(6),
        encode_short(1),
        zeros(2),
        zeros(2),
        zeros(2),
        encode_text("Away", 6),
    ]);
    doubles.write(dir, "DOUBLES.DB");
}
