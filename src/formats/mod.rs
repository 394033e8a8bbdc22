// src/formats/mod.rs
//! The format registry: a fixed, ordered set of named serializers.
//!
//! Registry order is the column order of every comparison table;
//! nothing here may sort or reorder `ALL`.

pub mod json;
pub mod rows;
pub mod typed;
pub mod xml;

use std::fmt;

use serde_json::Value;

use crate::error::{Result, TokcostError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    PrettyJson,
    CompactJson,
    YamlLike,
    Rows,
    Toon,
    Tson,
    Xml,
}

impl FormatKind {
    /// Every registered format, in declared (table column) order.
    pub const ALL: [FormatKind; 7] = [
        FormatKind::PrettyJson,
        FormatKind::CompactJson,
        FormatKind::YamlLike,
        FormatKind::Rows,
        FormatKind::Toon,
        FormatKind::Tson,
        FormatKind::Xml,
    ];

    /// Wire name, as accepted by `serialize` and `--baseline`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PrettyJson => "pretty-json",
            Self::CompactJson => "compact-json",
            Self::YamlLike => "yaml",
            Self::Rows => "csv",
            Self::Toon => "toon",
            Self::Tson => "tson",
            Self::Xml => "xml",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Serializes `value` with this format.
    ///
    /// # Errors
    /// All serializers are total over JSON-representable values; the error
    /// path exists as a defensive boundary and is converted into a degraded
    /// cell by the comparison engine, never an abort.
    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            Self::PrettyJson => json::pretty(value),
            Self::CompactJson => json::compact(value),
            Self::YamlLike => json::yaml_like(value),
            Self::Rows => rows::render(value),
            Self::Toon => typed::toon(value),
            Self::Tson => typed::tson(value),
            Self::Xml => xml::render(value),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registered format names in declared order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    FormatKind::ALL.iter().map(|k| k.name()).collect()
}

/// Serializes `value` with the named format.
///
/// # Errors
/// `UnknownFormat` if `name` is not registered; a serializer failure
/// surfaces as `SerializationFailed`.
pub fn serialize(name: &str, value: &Value) -> Result<String> {
    let kind = FormatKind::from_name(name).ok_or_else(|| TokcostError::UnknownFormat {
        name: name.to_string(),
    })?;
    kind.render(value)
}

/// Runtime type name of a value, as used by the typed and XML formats.
#[must_use]
pub fn runtime_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Plain string form of a value: strings unquoted, other scalars via their
/// display form, containers as compact JSON.
#[must_use]
pub fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

pub(crate) fn ser_err(kind: FormatKind, e: &impl fmt::Display) -> TokcostError {
    TokcostError::SerializationFailed {
        format: kind.name(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn runtime_type_covers_all_variants() {
        assert_eq!(runtime_type(&json!(null)), "null");
        assert_eq!(runtime_type(&json!(true)), "boolean");
        assert_eq!(runtime_type(&json!(3.5)), "number");
        assert_eq!(runtime_type(&json!("x")), "string");
        assert_eq!(runtime_type(&json!([])), "array");
        assert_eq!(runtime_type(&json!({})), "object");
    }

    #[test]
    fn plain_renders_strings_bare_and_containers_as_json() {
        assert_eq!(plain(&json!("hi")), "hi");
        assert_eq!(plain(&json!(42)), "42");
        assert_eq!(plain(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
