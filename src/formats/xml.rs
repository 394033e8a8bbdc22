// src/formats/xml.rs
use serde_json::Value;

use super::runtime_type;
use crate::error::Result;

/// Minimal XML rendition: a single root element whose text content is the
/// value's runtime type name. A deliberate placeholder, kept as-is.
///
/// # Errors
/// Total; the `Result` wrapper matches the registry's serializer contract.
pub fn render(value: &Value) -> Result<String> {
    Ok(format!("<value>{}</value>", runtime_type(value)))
}
