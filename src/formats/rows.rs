// src/formats/rows.rs
//! CSV-like row format for ordered sequences of records.

use serde_json::Value;

use super::plain;
use crate::error::Result;

/// Renders a sequence of records as comma-joined rows.
///
/// The column set is the union of all keys across all records, in
/// first-seen order. A record missing a key contributes an empty field.
/// Anything that is not a sequence falls back to its plain string form.
///
/// # Errors
/// Total; the `Result` wrapper matches the registry's serializer contract.
pub fn render(value: &Value) -> Result<String> {
    let Value::Array(items) = value else {
        return Ok(plain(value));
    };

    let columns = collect_columns(items);

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(columns.join(","));

    for item in items {
        let fields: Vec<String> = columns
            .iter()
            .map(|col| item.get(col.as_str()).map_or_else(String::new, plain))
            .collect();
        lines.push(fields.join(","));
    }

    Ok(lines.join("\n"))
}

/// Union of record keys in first-seen order. Non-record elements
/// contribute no columns.
fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        let Value::Object(map) = item else { continue };
        for key in map.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}
