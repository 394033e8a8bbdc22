// src/tokens.rs
//! Lexical scanner that splits serialized text into typed tokens.
//!
//! This is a counting tokenizer, not a grammar validator: it classifies
//! quoted strings, word runs, and structural punctuation, and silently
//! drops whitespace and anything else. Counts approximate LLM token
//! costs; they are not any real model's BPE.

use serde::Serialize;

/// Characters that lex as single punctuation tokens.
///
/// `:` is listed for completeness but never actually produces a `Punct`
/// token: it is also a word character, and the word class is tried first.
const PUNCT: [char; 9] = ['{', '}', '[', ']', ':', ',', '<', '=', '>'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A double-quoted string, quotes included.
    #[serde(rename = "string")]
    Str,
    /// A run of alphanumerics, `_`, `-`, `:`, `/`, or `.`.
    Word,
    /// A single structural character.
    #[serde(rename = "punctuation")]
    Punct,
}

/// One classified lexical unit of a serialized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Scans `text` left to right into a token sequence.
///
/// Class order matters and is fixed: quoted string, then word, then
/// punctuation. Whitespace and unclassified characters are skipped and
/// never emitted. Pure and deterministic; empty input yields an empty vec.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
        } else if c == '"' {
            let end = scan_string(&chars, i);
            tokens.push(Token {
                kind: TokenKind::Str,
                text: chars[i..end].iter().collect(),
            });
            i = end;
        } else if is_word_char(c) {
            let end = scan_word(&chars, i);
            tokens.push(Token {
                kind: TokenKind::Word,
                text: chars[i..end].iter().collect(),
            });
            i = end;
        } else if PUNCT.contains(&c) {
            tokens.push(Token {
                kind: TokenKind::Punct,
                text: c.to_string(),
            });
            i += 1;
        } else {
            // Not an error: unclassified characters produce no token.
            i += 1;
        }
    }

    tokens
}

/// Returns the index one past the string's closing quote.
///
/// The string ends at the first `"` whose immediately preceding character
/// is not a backslash (lookbehind semantics: `\"` never terminates, even
/// when that backslash is itself escaped as `\\`). An unterminated string
/// runs to the end of the input.
fn scan_string(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        if chars[i] == '"' && chars[i - 1] != '\\' {
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

fn scan_word(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && is_word_char(chars[i]) {
        i += 1;
    }
    i
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '/' | '.')
}

pub struct Tokenizer;

impl Tokenizer {
    /// Counts the tokens in the given text.
    #[must_use]
    pub fn count(text: &str) -> usize {
        tokenize(text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_lexes_as_word_not_punct() {
        // The word class wins for ':' because it is tried first.
        let tokens = tokenize("( : )");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].text, ":");
    }

    #[test]
    fn string_value_keeps_quotes() {
        let tokens = tokenize(r#""hi""#);
        assert_eq!(tokens[0].text, r#""hi""#);
    }
}
