// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokcostError {
    #[error("unknown format '{name}' (run `tokcost formats` for the registered names)")]
    UnknownFormat { name: String },

    #[error("unknown dataset '{name}' (not a preset and no --file supplies it)")]
    UnknownDataset { name: String },

    #[error("serialization failed in format '{format}': {reason}")]
    SerializationFailed { format: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokcostError>;
