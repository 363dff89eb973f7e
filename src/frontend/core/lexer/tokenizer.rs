//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::literals::{scan_char, scan_identifier, scan_number, scan_string};
use super::state::{LexerState, Language, PUNCTUATION, SINGLE_OPERATORS};
use crate::frontend::core::lexer::tokens::*;
use crate::util::diagnostic::{Diagnostic, DiagnosticCode};
use crate::util::span::Position;

/// Main lexer structure
///
/// Yields every classified span of the source, trivia included, in order.
/// Concatenating the text of all yielded tokens gives back the source.
pub struct Lexer<'a> {
    source: &'a str,
    position: Position,
    state: LexerState,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(
        source: &'a str,
        language: Language,
    ) -> Self {
        Self {
            source,
            position: Position::start(),
            state: LexerState::new(language),
            diagnostics: Vec::new(),
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Remaining input
    fn rest(&self) -> &'a str {
        &self.source[self.position.offset..]
    }

    /// Diagnostics recorded so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the recorded diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Generate next token
    pub fn next_token(&mut self) -> Option<Token> {
        let rest = self.rest();
        let c = rest.chars().next()?;
        let spec = self.state.spec();

        // 1. whitespace
        if c.is_whitespace() {
            let len = rest
                .char_indices()
                .find(|&(_, c)| !c.is_whitespace())
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            return Some(self.make_token(TokenKind::Whitespace, len, false));
        }

        // 2. comments, block before line
        if rest.starts_with("/*") {
            let len = match rest[2..].find("*/") {
                Some(end) => end + 4,
                None => {
                    self.record(
                        DiagnosticCode::UnterminatedComment,
                        "Unterminated block comment runs to end of input".to_string(),
                    );
                    rest.len()
                }
            };
            return Some(self.make_token(TokenKind::CommentMulti, len, false));
        }
        if rest.starts_with("//") {
            return Some(self.make_token(TokenKind::CommentSingle, line_len(rest), false));
        }

        // 3. preprocessor directive lines, consumed like a line comment
        if spec.preprocessor && c == '#' {
            return Some(self.make_token(TokenKind::CommentSingle, line_len(rest), false));
        }

        // 4. keywords and identifiers
        if let Some(len) = scan_identifier(rest) {
            let kind = spec.classify_word(&rest[..len]);
            return Some(self.make_token(kind, len, false));
        }

        // 5. string literal
        if let Some(scan) = scan_string(rest) {
            if !scan.terminated {
                self.record(
                    DiagnosticCode::UnterminatedString,
                    "Unterminated string literal runs to end of input".to_string(),
                );
            }
            return Some(self.make_token(TokenKind::LiteralString, scan.len, false));
        }

        // 6. character literal
        if let Some(len) = scan_char(rest) {
            return Some(self.make_token(TokenKind::LiteralChar, len, false));
        }

        // 7. numeric literal
        if let Some(len) = scan_number(rest) {
            let literal = super::literals::number_literal(&rest[..len]);
            if literal.value.is_none() {
                self.record(
                    DiagnosticCode::InvalidNumber,
                    format!("Invalid number literal '{}'", &rest[..len]),
                );
            }
            return Some(self.make_token(TokenKind::LiteralNumber, len, false));
        }

        // 8. operators, longest match first
        if let Some((len, generic_open)) = self.scan_operator(rest, c) {
            return Some(self.make_token(TokenKind::Operator, len, generic_open));
        }

        // 9. punctuation
        if PUNCTUATION.contains(&c) {
            return Some(self.make_token(TokenKind::Punctuation, c.len_utf8(), false));
        }

        // 10. anything else is a single invalid character
        let message = format!("Invalid character '{}'", c);
        self.record(DiagnosticCode::InvalidCharacter, message.clone());
        let mut token = self.make_token(TokenKind::Error, c.len_utf8(), false);
        token.message = Some(message);
        Some(token)
    }

    /// Match an operator at the cursor; returns its byte length and whether
    /// it opens a generic bracket
    fn scan_operator(
        &self,
        rest: &str,
        c: char,
    ) -> Option<(usize, bool)> {
        if c == '<' && self.state.opens_generic(self.position.offset, rest[1..].chars().next()) {
            return Some((1, true));
        }
        if c == '>' && self.state.closes_generic() {
            return Some((1, false));
        }
        if let Some(op) = self
            .state
            .spec()
            .operators
            .iter()
            .find(|op| rest.starts_with(**op))
        {
            return Some((op.len(), false));
        }
        SINGLE_OPERATORS.contains(&c).then(|| (c.len_utf8(), false))
    }

    /// Record a diagnostic at the cursor
    fn record(
        &mut self,
        code: DiagnosticCode,
        message: String,
    ) {
        self.diagnostics
            .push(Diagnostic::new(code, message, self.position));
    }

    /// Cut `len` bytes at the cursor into a token and advance past them
    fn make_token(
        &mut self,
        kind: TokenKind,
        len: usize,
        generic_open: bool,
    ) -> Token {
        let text = &self.source[self.position.offset..self.position.offset + len];
        let token = Token::new(text, kind, self.position);
        self.position.advance(text);
        self.state.note(&token, generic_open);
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Byte length up to (not including) the next newline
fn line_len(rest: &str) -> usize {
    rest.find('\n').unwrap_or(rest.len())
}
