// src/metrics.rs
use serde::Serialize;

use crate::tokens::Tokenizer;

/// Token and byte cost of one serialized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub token_count: usize,
    /// Exact UTF-8 encoded length, not the character count.
    pub byte_length: usize,
}

/// Measures a serialized text. Pure and deterministic: `token_count` is
/// exactly `tokenize(text).len()`, `byte_length` is the UTF-8 byte length.
#[must_use]
pub fn measure(text: &str) -> Metrics {
    Metrics {
        token_count: Tokenizer::count(text),
        byte_length: text.len(),
    }
}
