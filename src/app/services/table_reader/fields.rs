//! Per-type decoding of the legacy engine's on-disk field encodings
//!
//! The engine stores signed integers and dates with a bias encoding: the
//! sign lives in the top bit of the leading byte and negative magnitudes
//! are bitwise-complemented rather than two's-complement. Doubles are
//! additionally byte-reversed on disk. These conventions are reproduced
//! here exactly; approximating them corrupts real data.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::constants::{LOGICAL_TRUE, MAX_DAY_COUNT, MS_PER_DAY, SIGN_BIT, type_tags};

// =============================================================================
// Field Types
// =============================================================================

/// Closed enumeration of the type tags observed in league table files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Date,
    Short,
    Long,
    Currency,
    Number,
    Logical,
    Time,
    Timestamp,
    /// A tag this importer has never seen; decoded as text
    Unrecognized(u8),
}

impl FieldType {
    /// Map an on-disk tag byte to its type
    pub fn from_tag(tag: u8) -> FieldType {
        match tag {
            type_tags::TEXT => FieldType::Text,
            type_tags::DATE => FieldType::Date,
            type_tags::SHORT => FieldType::Short,
            type_tags::LONG => FieldType::Long,
            type_tags::CURRENCY => FieldType::Currency,
            type_tags::NUMBER => FieldType::Number,
            type_tags::LOGICAL => FieldType::Logical,
            type_tags::TIME => FieldType::Time,
            type_tags::TIMESTAMP => FieldType::Timestamp,
            other => FieldType::Unrecognized(other),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Date => write!(f, "date"),
            FieldType::Short => write!(f, "short"),
            FieldType::Long => write!(f, "long"),
            FieldType::Currency => write!(f, "currency"),
            FieldType::Number => write!(f, "number"),
            FieldType::Logical => write!(f, "logical"),
            FieldType::Time => write!(f, "time"),
            FieldType::Timestamp => write!(f, "timestamp"),
            FieldType::Unrecognized(tag) => write!(f, "unrecognized({})", tag),
        }
    }
}

// =============================================================================
// Decoded Values
// =============================================================================

/// One decoded scalar; absence of a value is `Option::None` at the
/// decoder boundary, never a variant here
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Integer view; whole-valued floats coerce because the legacy tool
    /// stored some counters in Number columns
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Float(value) => Some(*value as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            FieldValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            FieldValue::Timestamp(ts) => Some(ts.date()),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            FieldValue::Time(time) => Some(*time),
            FieldValue::Timestamp(ts) => Some(ts.time()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Boolean(value) => write!(f, "{}", value),
            FieldValue::Date(date) => write!(f, "{}", date),
            FieldValue::Time(time) => write!(f, "{}", time),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one field's byte slice according to its type tag.
///
/// An all-zero slice is the engine's universal null marker and decodes to
/// `None` for every type, before any per-type dispatch. Slices shorter
/// than a numeric type needs also decode to `None`; the decoder never
/// reads past the slice it is given.
pub fn decode_field(bytes: &[u8], field_type: FieldType) -> Option<FieldValue> {
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }

    match field_type {
        FieldType::Text => Some(FieldValue::Text(decode_text(bytes))),
        FieldType::Date => decode_date(bytes).map(FieldValue::Date),
        FieldType::Short => decode_bias_int(bytes, 2).map(FieldValue::Integer),
        FieldType::Long => decode_bias_int(bytes, 4).map(FieldValue::Integer),
        FieldType::Currency | FieldType::Number => decode_double(bytes).map(FieldValue::Float),
        FieldType::Logical => Some(FieldValue::Boolean(bytes[0] == LOGICAL_TRUE)),
        FieldType::Time => decode_time(bytes).map(FieldValue::Time),
        FieldType::Timestamp => decode_timestamp(bytes).map(FieldValue::Timestamp),
        FieldType::Unrecognized(_) => {
            let text = decode_text(bytes);
            if text.is_empty() {
                None
            } else {
                Some(FieldValue::Text(text))
            }
        }
    }
}

/// Truncate at the first zero byte and decode as single-byte characters
fn decode_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text: String = bytes[..end].iter().map(|&b| b as char).collect();
    text.trim().to_string()
}

/// Bias-encoded integer over `width` leading bytes (2 for Short, 4 for
/// Long). Sign bit set: clear it, remaining bits are the magnitude. Sign
/// bit clear: complement every byte, combine the same way, negate.
fn decode_bias_int(bytes: &[u8], width: usize) -> Option<i64> {
    if bytes.len() < width {
        return None;
    }

    let negative = bytes[0] & SIGN_BIT == 0;
    let mut magnitude: i64 = 0;
    for (index, &byte) in bytes[..width].iter().enumerate() {
        let mut b = if negative { !byte } else { byte };
        if index == 0 {
            b &= !SIGN_BIT;
        }
        magnitude = (magnitude << 8) | b as i64;
    }

    Some(if negative { -magnitude } else { magnitude })
}

/// Day-count date: big-endian u32 whose top bit marks a valid encoding.
/// Day 1 is 0001-01-01 proleptic Gregorian.
fn decode_date(bytes: &[u8]) -> Option<NaiveDate> {
    if bytes.len() < 4 {
        return None;
    }

    let raw = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if raw & 0x8000_0000 == 0 {
        return None;
    }

    let days = raw & 0x7fff_ffff;
    if days == 0 || days >= MAX_DAY_COUNT {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
}

/// Milliseconds from midnight in the Long convention
fn decode_time(bytes: &[u8]) -> Option<NaiveTime> {
    let millis = decode_bias_int(bytes, 4)?;
    if !(0..MS_PER_DAY).contains(&millis) {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(
        (millis / 1000) as u32,
        ((millis % 1000) * 1_000_000) as u32,
    )
}

/// Byte-reversed IEEE-754 double. Sign bit set: clear just that bit
/// (positive value). Sign bit clear: complement all eight bytes
/// (negative value). Either way the result is reversed into native order.
fn decode_double(bytes: &[u8]) -> Option<f64> {
    if bytes.len() < 8 {
        return None;
    }

    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    if buf[0] & SIGN_BIT != 0 {
        buf[0] &= !SIGN_BIT;
    } else {
        for b in &mut buf {
            *b = !*b;
        }
    }
    buf.reverse();
    Some(f64::from_le_bytes(buf))
}

/// Four date bytes followed by four time bytes. The date portion is
/// required; an unset time portion falls back to midnight.
fn decode_timestamp(bytes: &[u8]) -> Option<NaiveDateTime> {
    if bytes.len() < 8 {
        return None;
    }

    let date = decode_date(&bytes[..4])?;
    let time = if bytes[4..8].iter().all(|&b| b == 0) {
        NaiveTime::MIN
    } else {
        decode_time(&bytes[4..8]).unwrap_or(NaiveTime::MIN)
    };
    Some(date.and_time(time))
}
