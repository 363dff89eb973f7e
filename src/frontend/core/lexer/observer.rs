//! Symbol observer
//!
//! Feeds significant tokens, in document order, into the symbol table:
//! identifiers and literals are recorded, braces open and close scopes and
//! the declaration hint tracks pending declared types.

use super::hint::DeclarationHint;
use super::literals::{char_value, number_literal, string_value, LiteralValue};
use super::scope::ScopeLabel;
use super::state::{Language, LanguageSpec};
use super::symbols::{SymbolTableEntry, SymbolTableManager};
use super::tokens::{Token, TokenKind};
use crate::util::diagnostic::Diagnostic;

/// Drives a [`SymbolTableManager`] from a token stream
#[derive(Debug)]
pub struct SymbolObserver {
    spec: &'static LanguageSpec,
    table: SymbolTableManager,
    hint: DeclarationHint,
    /// Significant tokens since the last `;`, `{` or `}`
    statement: Vec<Token>,
}

impl SymbolObserver {
    pub fn new(language: Language) -> Self {
        Self {
            spec: language.spec(),
            table: SymbolTableManager::new(),
            hint: DeclarationHint::new(),
            statement: Vec::new(),
        }
    }

    /// Observe one token; trivia and error tokens are ignored
    pub fn observe(
        &mut self,
        token: &Token,
    ) {
        let at = token.position();
        match token.kind {
            TokenKind::Identifier => {
                let declared = self.hint.take();
                self.table
                    .observe_identifier(&token.text, at, declared.is_some(), declared.as_deref());
            }
            TokenKind::LiteralNumber => {
                let literal = number_literal(&token.text);
                self.table
                    .observe_literal(&token.text, token.kind, literal.data_type, literal.value, at);
            }
            TokenKind::LiteralString => {
                let value = Some(string_value(&token.text));
                self.table
                    .observe_literal(&token.text, token.kind, self.spec.string_type, value, at);
            }
            TokenKind::LiteralChar => {
                let value = char_value(&token.text);
                self.table
                    .observe_literal(&token.text, token.kind, "char", value, at);
            }
            TokenKind::LiteralBoolean => {
                let value = Some(LiteralValue::Bool(token.text == "true"));
                self.table
                    .observe_literal(&token.text, token.kind, self.spec.boolean_type, value, at);
            }
            TokenKind::Keyword if token.text == self.spec.null_keyword => {
                self.table.observe_literal(
                    &token.text,
                    token.kind,
                    self.spec.null_keyword,
                    Some(LiteralValue::Null),
                    at,
                );
            }
            TokenKind::Punctuation if token.text == "{" => {
                let label = ScopeLabel::for_statement(&self.statement);
                self.table.push_scope(&label, at);
            }
            TokenKind::Punctuation if token.text == "}" => self.table.pop_scope(at),
            TokenKind::Error
            | TokenKind::Whitespace
            | TokenKind::CommentSingle
            | TokenKind::CommentMulti => return,
            _ => {}
        }

        if token.kind != TokenKind::Identifier {
            self.hint.observe(token, self.spec);
        }

        if matches!(token.text.as_str(), ";" | "{" | "}") && token.kind == TokenKind::Punctuation {
            self.statement.clear();
        } else {
            self.statement.push(token.clone());
        }
    }

    /// Finish the run, returning the exported table and its diagnostics
    pub fn finish(self) -> (Vec<SymbolTableEntry>, Vec<Diagnostic>) {
        self.table.finish()
    }
}

/// Build the symbol table for a token stream in one go
pub fn observe_all<'a>(
    tokens: impl IntoIterator<Item = &'a Token>,
    language: Language,
) -> (Vec<SymbolTableEntry>, Vec<Diagnostic>) {
    let mut observer = SymbolObserver::new(language);
    for token in tokens {
        observer.observe(token);
    }
    observer.finish()
}
