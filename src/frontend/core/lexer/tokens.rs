//! Token types

use crate::util::span::Position;
use serde::Serialize;

/// Token kind
///
/// `Whitespace`, `CommentSingle` and `CommentMulti` only exist inside the
/// scanner; the analysis result never contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    LiteralString,
    LiteralNumber,
    LiteralBoolean,
    LiteralChar,
    Operator,
    Punctuation,
    CommentSingle,
    CommentMulti,
    Whitespace,
    Error,
}

impl TokenKind {
    /// Upper-case name, e.g. `LITERAL_NUMBER`
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LiteralString => "LITERAL_STRING",
            TokenKind::LiteralNumber => "LITERAL_NUMBER",
            TokenKind::LiteralBoolean => "LITERAL_BOOLEAN",
            TokenKind::LiteralChar => "LITERAL_CHAR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::CommentSingle => "COMMENT_SINGLE",
            TokenKind::CommentMulti => "COMMENT_MULTI",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Error => "ERROR",
        }
    }

    /// Whitespace and comments: consumed for position tracking only
    pub fn is_trivia(&self) -> bool {
        match self {
            TokenKind::Whitespace | TokenKind::CommentSingle | TokenKind::CommentMulti => true,
            TokenKind::Keyword
            | TokenKind::Identifier
            | TokenKind::LiteralString
            | TokenKind::LiteralNumber
            | TokenKind::LiteralBoolean
            | TokenKind::LiteralChar
            | TokenKind::Operator
            | TokenKind::Punctuation
            | TokenKind::Error => false,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    /// Byte offset of the first character
    #[serde(skip)]
    pub offset: usize,
    /// Set on `Error` tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Token {
    /// Create a token starting at `position`
    pub fn new(
        text: impl Into<String>,
        kind: TokenKind,
        position: Position,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            line: position.line,
            column: position.column,
            offset: position.offset,
            message: None,
        }
    }

    /// Start position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Punctuation token with the given text
    #[inline]
    pub fn is_punct(
        &self,
        text: &str,
    ) -> bool {
        self.kind == TokenKind::Punctuation && self.text == text
    }

    /// Operator token with the given text
    #[inline]
    pub fn is_op(
        &self,
        text: &str,
    ) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    /// Keyword token with the given text
    #[inline]
    pub fn is_keyword(
        &self,
        text: &str,
    ) -> bool {
        self.kind == TokenKind::Keyword && self.text == text
    }
}

impl std::fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} {:?} at {}:{}", self.kind, self.text, self.line, self.column)
    }
}
