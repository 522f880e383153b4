//! Test utilities and test modules for the entity parsers

mod results_tests;

use crate::app::services::table_reader::{FieldValue, RawRecord};

/// Build a raw record from (field name, value) pairs
pub fn record(fields: &[(&str, FieldValue)]) -> RawRecord {
    let mut record = RawRecord::default();
    for (name, value) in fields {
        record.insert(name.to_string(), value.clone());
    }
    record
}

pub fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

pub fn int(value: i64) -> FieldValue {
    FieldValue::Integer(value)
}
