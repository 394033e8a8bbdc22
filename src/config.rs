// src/config.rs
//! Optional `tokcost.toml` preferences. Missing file means defaults;
//! a malformed file warns and falls back rather than aborting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::formats::FormatKind;

pub const CONFIG_FILE: &str = "tokcost.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Format every percentage column is measured against.
    #[serde(default = "default_baseline")]
    pub baseline: String,
    /// Token-preview truncation threshold (a display concern, not a
    /// tokenizer one).
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            preview_limit: default_preview_limit(),
        }
    }
}

fn default_baseline() -> String {
    FormatKind::ALL[0].name().to_string()
}

fn default_preview_limit() -> usize {
    240
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `tokcost.toml` from the working directory if present.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads preferences from `path`, falling back to defaults when the
    /// file is absent or unparsable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content)
            .map_err(|e| eprintln!("warning: ignoring malformed {}: {e}", path.display()))
            .unwrap_or_default()
    }
}
