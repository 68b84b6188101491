//! Flat key-value reports of analysis records
//!
//! Nested objects are flattened into dotted keys so every record prints as a
//! single-level JSON object: `{"symmetry.radial": true, ...}`.

use crate::io::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Dotted key to scalar or array value, sorted by key
pub type FlatReport = BTreeMap<String, Value>;

fn flatten_into(prefix: &str, value: Value, report: &mut FlatReport) {
    match value {
        Value::Object(fields) if !fields.is_empty() => {
            for (key, field) in fields {
                flatten_into(&format!("{prefix}.{key}"), field, report);
            }
        }
        other => {
            report.insert(prefix.to_string(), other);
        }
    }
}

/// Flatten any serializable record into dotted keys
///
/// Arrays stay as values. A bare scalar is stored under the key `value`.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized
pub fn flatten<T: Serialize>(record: &T) -> Result<FlatReport> {
    let mut report = FlatReport::new();
    match serde_json::to_value(record)? {
        Value::Object(fields) => {
            for (key, field) in fields {
                flatten_into(&key, field, &mut report);
            }
        }
        scalar => {
            report.insert("value".to_string(), scalar);
        }
    }
    Ok(report)
}

/// Flat report rendered as a pretty JSON object
///
/// # Errors
///
/// Returns an error if the record cannot be serialized
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    let object: Map<String, Value> = flatten(record)?.into_iter().collect();
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}
