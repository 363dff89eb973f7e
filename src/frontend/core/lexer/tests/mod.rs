//! Lexer tests module
//!
//! - basic: identifiers, whitespace, positions
//! - literals: strings, chars, numbers, booleans
//! - operators: longest match and punctuation
//! - keywords: per-language keyword tables
//! - comments: comments and preprocessor lines
//! - errors: invalid characters and unterminated input
//! - generics: angle-bracket heuristic
//! - symbols: symbol observer, scopes and declaration hints


use super::{tokenize, Language, TokenKind};

/// (kind, text) pairs of the significant tokens
pub(super) fn kinds(
    source: &str,
    language: Language,
) -> Vec<(TokenKind, String)> {
    tokenize(source, language)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Texts of the significant tokens
pub(super) fn texts(
    source: &str,
    language: Language,
) -> Vec<String> {
    tokenize(source, language)
        .tokens
        .into_iter()
        .map(|t| t.text)
        .collect()
}
