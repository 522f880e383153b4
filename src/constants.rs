//! Application constants for the FrameLeague importer
//!
//! This module contains the legacy table format's fixed geometry, the
//! on-disk type tags and encoding markers, source file naming conventions,
//! and placeholder values used throughout the importer.

// =============================================================================
// Legacy Table File Geometry
// =============================================================================

/// Size of one storage block, including the header block at offset 0
pub const BLOCK_SIZE: usize = 2048;

/// Bytes reserved at the start of each data block
pub const BLOCK_HEADER_SIZE: usize = 6;

/// Offset of the first data block (block 0 holds the table header)
pub const DATA_START_OFFSET: usize = BLOCK_SIZE;

/// Absolute byte offsets of the fixed header fields
pub mod header_offsets {
    /// Little-endian u16: bytes per fixed-width record
    pub const RECORD_SIZE: usize = 0;

    /// Little-endian u32: total logical record count
    pub const RECORD_COUNT: usize = 6;

    /// Single byte: number of fields per record
    pub const FIELD_COUNT: usize = 33;

    /// Start of the per-field type-tag bytes; the same number of
    /// per-field size bytes follows immediately after
    pub const FIELD_INFO: usize = 78;

    /// Start of the region scanned for recoverable field names
    pub const NAME_SCAN_START: usize = 200;
}

/// Minimum file length able to hold the fixed numeric header fields
/// (through the field-count byte at offset 33)
pub const MIN_HEADER_LEN: usize = 34;

// =============================================================================
// Field Name Recovery Heuristics
// =============================================================================

/// Shortest accepted field-name candidate
pub const NAME_MIN_LEN: usize = 2;

/// Longest accepted field-name candidate
pub const NAME_MAX_LEN: usize = 30;

/// Candidates containing this substring (any case) are header noise
pub const NAME_REJECT_SUBSTRING: &str = "ascii";

/// Extension marking the leading candidate as the table's own name
pub const TABLE_NAME_SUFFIX: &str = ".db";

/// Prefix for synthetic names padding out unrecovered fields
pub const SYNTHETIC_NAME_PREFIX: &str = "Field";

// =============================================================================
// Field Type Tags
// =============================================================================

/// On-disk type-tag byte values used by the legacy engine
pub mod type_tags {
    /// Fixed-width single-byte-character text
    pub const TEXT: u8 = 1;

    /// Day-count date, big-endian with sign-bit bias
    pub const DATE: u8 = 2;

    /// 16-bit bias-encoded integer
    pub const SHORT: u8 = 3;

    /// 32-bit bias-encoded integer
    pub const LONG: u8 = 4;

    /// Currency amount, byte-reversed IEEE-754 double
    pub const CURRENCY: u8 = 5;

    /// General number, byte-reversed IEEE-754 double
    pub const NUMBER: u8 = 6;

    /// Single-byte boolean
    pub const LOGICAL: u8 = 9;

    /// Milliseconds from midnight, Long convention
    pub const TIME: u8 = 20;

    /// Date followed by Time in one 8-byte field
    pub const TIMESTAMP: u8 = 21;
}

// =============================================================================
// Value Encoding Markers
// =============================================================================

/// Top bit of the leading byte carries the sign in bias encodings
pub const SIGN_BIT: u8 = 0x80;

/// The one byte value the legacy engine writes for logical true
pub const LOGICAL_TRUE: u8 = 0x81;

/// Day counts at or above this are treated as garbage, not dates
pub const MAX_DAY_COUNT: u32 = 3_000_000;

/// Milliseconds in one day, the exclusive upper bound for Time values
pub const MS_PER_DAY: i64 = 86_400_000;

// =============================================================================
// Source File Conventions
// =============================================================================

/// Expected table file stems, one per entity kind (matched case-insensitively)
pub mod table_files {
    pub const DIVISION: &str = "DIVISION";
    pub const VENUE: &str = "VENUE";
    pub const TEAM: &str = "TEAM";
    pub const PLAYER: &str = "PLAYER";
    pub const MATCH: &str = "MATCH";
    pub const SINGLES_FRAME: &str = "FRAME";
    pub const DOUBLES_FRAME: &str = "DOUBLES";

    /// Table file extension (matched case-insensitively)
    pub const EXTENSION: &str = "DB";
}

// =============================================================================
// Legacy Placeholder Values
// =============================================================================

/// Division name the legacy tool ships in its sample data
pub const DIVISION_PLACEHOLDER_NAME: &str = "Test";

/// Reserved player name representing void or forfeited frames
pub const WALKOVER_PLAYER_NAME: &str = "Walkover";

// =============================================================================
// Import Pipeline
// =============================================================================

/// Number of entity-kind steps in one import run
pub const IMPORT_STEP_COUNT: usize = 7;

/// Maximum address lines concatenated into one venue address
pub const VENUE_ADDRESS_LINES: usize = 4;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a byte is printable ASCII for name recovery purposes
pub fn is_printable(byte: u8) -> bool {
    (32..=126).contains(&byte)
}

/// Synthetic label for a field whose name was not recovered (1-based)
pub fn synthetic_field_name(index: usize) -> String {
    format!("{}{}", SYNTHETIC_NAME_PREFIX, index + 1)
}
