//! Declaration hint
//!
//! Remembers the most recent type keyword so that the next identifier can
//! be recorded as a declaration of that type.

use super::state::{LanguageSpec, DECLARATOR_KEYWORDS, STORAGE_MODIFIERS};
use super::tokens::{Token, TokenKind};

/// Pending declared type, consumed by exactly one identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationHint {
    pending: Option<String>,
}

impl DeclarationHint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending type, if any
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Update the hint for a non-identifier token
    pub fn observe(
        &mut self,
        token: &Token,
        spec: &LanguageSpec,
    ) {
        match token.kind {
            TokenKind::Keyword => {
                let word = token.text.as_str();
                if spec.is_type_keyword(word) || DECLARATOR_KEYWORDS.contains(&word) {
                    self.pending = Some(token.text.clone());
                } else if !STORAGE_MODIFIERS.contains(&word) {
                    self.clear();
                }
            }
            TokenKind::LiteralString
            | TokenKind::LiteralNumber
            | TokenKind::LiteralBoolean
            | TokenKind::LiteralChar => self.clear(),
            TokenKind::Punctuation => {
                if matches!(token.text.as_str(), ";" | "{" | "}" | "(" | ")") {
                    self.clear();
                }
            }
            TokenKind::Operator => {
                if matches!(token.text.as_str(), "=" | ",") {
                    self.clear();
                }
            }
            TokenKind::Identifier
            | TokenKind::Error
            | TokenKind::CommentSingle
            | TokenKind::CommentMulti
            | TokenKind::Whitespace => {}
        }
    }
}
