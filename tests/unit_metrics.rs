// tests/unit_metrics.rs
//! Unit tests for the metrics computer.
//!
//! VERIFICATION STRATEGY:
//! 1. Byte length is the encoded UTF-8 length, not the character count.
//! 2. Token count agrees exactly with the tokenizer.
//! 3. Empty text measures to all zeros.

use tokcost_core::metrics::measure;
use tokcost_core::tokens::tokenize;

#[test]
fn test_empty_text() {
    let m = measure("");
    assert_eq!(m.token_count, 0);
    assert_eq!(m.byte_length, 0);
}

#[test]
fn test_ascii_byte_length_equals_char_count() {
    let m = measure("abc def");
    assert_eq!(m.byte_length, 7);
}

#[test]
fn test_multibyte_byte_length_exceeds_char_count() {
    let text = "héllo";
    let m = measure(text);
    assert_eq!(text.chars().count(), 5);
    assert_eq!(m.byte_length, 6);
    assert!(m.byte_length > text.chars().count());
}

#[test]
fn test_token_count_matches_tokenizer() {
    for text in [r#"{"a": 1}"#, "plain words here", "", "héllo \"wörld\""] {
        assert_eq!(measure(text).token_count, tokenize(text).len());
    }
}
