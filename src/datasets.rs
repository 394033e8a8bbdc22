// src/datasets.rs
//! Built-in preset datasets and the resolver seam.
//!
//! The core engine never resolves names itself; it takes a resolver
//! closure. The presets here are what the CLI feeds that closure, chosen
//! to exercise the interesting serializer paths (non-uniform record keys,
//! nesting, scalars, multi-byte text).

use std::sync::LazyLock;

use serde_json::{json, Value};

static PRESETS: LazyLock<Vec<(&'static str, Value)>> = LazyLock::new(|| {
    vec![
        (
            "users",
            json!([
                {"id": 1, "name": "ada", "role": "admin"},
                {"id": 2, "name": "grace", "role": "dev", "email": "grace@example.com"},
                {"id": 3, "name": "linus", "role": "dev"},
                {"id": 4, "name": "margaret", "role": "ops", "active": true},
                {"id": 5, "name": "alan", "role": "dev"}
            ]),
        ),
        (
            "invoice",
            json!({
                "number": "INV-2041",
                "issued": "2025-11-03",
                "customer": {"name": "Acme Tooling", "country": "DE"},
                "lines": [
                    {"sku": "wrench", "qty": 3, "price": 12.5},
                    {"sku": "socket-set", "qty": 1, "price": 89.0}
                ],
                "paid": false
            }),
        ),
        (
            "config",
            json!({
                "retries": 3,
                "timeout_ms": 2500,
                "verbose": false,
                "endpoint": "https://api.example.com/v2",
                "regions": ["eu-1", "us-1"]
            }),
        ),
        (
            "readme",
            json!(
                "Renders datasets in several formats and counts approximate \
                 tokens. Café-grade accuracy: close enough to compare formats, \
                 not a real model's tokenizer."
            ),
        ),
    ]
});

/// Preset names in declared order.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Looks up a preset dataset by name.
#[must_use]
pub fn resolve_preset(name: &str) -> Option<&'static Value> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, value)| value)
}
