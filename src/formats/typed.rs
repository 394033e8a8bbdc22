// src/formats/typed.rs
//! The two type-annotated formats.
//!
//! `toon` annotates every field with its runtime type and truncates long
//! sequences; `tson` is pretty JSON fenced between comment-marker lines.

use serde_json::Value;

use super::{json, plain, runtime_type};
use crate::error::Result;

/// Number of sequence elements rendered in full before truncation.
const TOON_HEAD: usize = 3;

const TSON_OPEN: &str = "// tson";
const TSON_CLOSE: &str = "// end tson";

/// Typed-annotation rendition.
///
/// Sequences get a count header, one annotated line per element for the
/// first three, and a remainder line when longer. Everything else is a
/// single semicolon-joined annotated line with no truncation.
///
/// # Errors
/// Total; the `Result` wrapper matches the registry's serializer contract.
pub fn toon(value: &Value) -> Result<String> {
    let Value::Array(items) = value else {
        return Ok(annotate(value, ";"));
    };

    let mut lines = Vec::with_capacity(items.len().min(TOON_HEAD) + 2);
    lines.push(format!("[{}]", items.len()));

    for item in items.iter().take(TOON_HEAD) {
        lines.push(annotate(item, ","));
    }
    if items.len() > TOON_HEAD {
        lines.push(format!("+{} more", items.len() - TOON_HEAD));
    }

    Ok(lines.join("\n"))
}

/// `key:type(value)` pairs for a record, or a single `type(value)` for a
/// scalar, joined with `sep`.
fn annotate(value: &Value, sep: &str) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}:{}({})", runtime_type(v), plain(v)))
            .collect::<Vec<_>>()
            .join(sep),
        other => format!("{}({})", runtime_type(other), plain(other)),
    }
}

/// Typed-block rendition: pretty JSON between comment markers.
///
/// # Errors
/// Defensive only; `Value` always serializes.
pub fn tson(value: &Value) -> Result<String> {
    Ok(format!("{TSON_OPEN}\n{}\n{TSON_CLOSE}", json::pretty(value)?))
}
