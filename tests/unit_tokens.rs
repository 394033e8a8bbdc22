// tests/unit_tokens.rs
//! Unit tests for the lexical tokenizer.
//!
//! VERIFICATION STRATEGY:
//! 1. Determinism: identical input must yield identical token sequences.
//! 2. Class semantics: quoted strings (including the escaped-quote
//!    lookbehind), word runs, and single-character punctuation.
//! 3. Edge cases: empty input, whitespace-only input, unterminated
//!    strings, and silently skipped characters.

use tokcost_core::tokens::{tokenize, Token, TokenKind, Tokenizer};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_determinism() {
    let input = r#"{"a": 1, "b": [true, "x y"]}"#;
    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn test_empty_and_whitespace_yield_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n").is_empty());
    assert_eq!(Tokenizer::count(""), 0);
}

#[test]
fn test_quoted_string_keeps_quotes() {
    let tokens = tokenize(r#""a b""#);
    assert_eq!(kinds(&tokens), vec![TokenKind::Str]);
    assert_eq!(tokens[0].text, r#""a b""#);
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    let tokens = tokenize(r#""a\"b" x"#);
    assert_eq!(texts(&tokens), vec![r#""a\"b""#, "x"]);
    assert_eq!(kinds(&tokens), vec![TokenKind::Str, TokenKind::Word]);
}

#[test]
fn test_lookbehind_ignores_double_backslash() {
    // A quote preceded by a backslash never terminates the string, even
    // when that backslash is itself escaped. The whole input becomes one
    // unterminated string token.
    let input = r#""ab\\" x"#;
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, input);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize(r#"x "abc"#);
    assert_eq!(texts(&tokens), vec!["x", r#""abc"#]);
    assert_eq!(tokens[1].kind, TokenKind::Str);
}

#[test]
fn test_word_run_is_maximal() {
    let input = "foo_bar-baz:qux/v1.2";
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Word);
    assert_eq!(tokens[0].text, input);
}

#[test]
fn test_punctuation_singles() {
    let tokens = tokenize("{}[],<=>");
    assert_eq!(
        texts(&tokens),
        vec!["{", "}", "[", "]", ",", "<", "=", ">"]
    );
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Punct));
}

#[test]
fn test_unclassified_characters_are_skipped() {
    // '@', '©', '(' and ')' belong to no class and produce no token.
    let tokens = tokenize("a @ b © (c)");
    assert_eq!(texts(&tokens), vec!["a", "b", "c"]);
}

#[test]
fn test_json_text_token_shape() {
    // '{' punct, string key, ':' folds into the word run with the value.
    let tokens = tokenize(r#"{"a":1}"#);
    assert_eq!(texts(&tokens), vec!["{", r#""a""#, ":1", "}"]);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Punct,
            TokenKind::Str,
            TokenKind::Word,
            TokenKind::Punct
        ]
    );
}
