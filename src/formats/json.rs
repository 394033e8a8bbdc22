// src/formats/json.rs
//! The three JSON-derived formats: pretty, compact, and the crude
//! brace-stripped YAML approximation.

use serde_json::Value;

use super::{ser_err, FormatKind};
use crate::error::Result;

/// Canonical structured serialization, 2-space indent, insertion-order keys.
///
/// # Errors
/// Defensive only; `Value` always serializes.
pub fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ser_err(FormatKind::PrettyJson, &e))
}

/// Same serialization with no inserted whitespace.
///
/// # Errors
/// Defensive only; `Value` always serializes.
pub fn compact(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ser_err(FormatKind::CompactJson, &e))
}

/// Pretty JSON with every literal `{` and `}` deleted, including braces
/// inside string values. Not a YAML emitter; the crude transform is kept
/// for compatibility with renditions produced by earlier versions.
///
/// # Errors
/// Defensive only; `Value` always serializes.
pub fn yaml_like(value: &Value) -> Result<String> {
    Ok(pretty(value)?.replace(['{', '}'], ""))
}
