//! Symbol table management
//! Scoped insertion and lookup of identifiers and literal constants

use super::literals::LiteralValue;
use super::scope::{ScopeId, ScopeLabel, ScopeStack};
use super::tokens::TokenKind;
use crate::util::diagnostic::{Diagnostic, DiagnosticCode};
use crate::util::span::Position;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Extra facts about a symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_constant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<LiteralValue>,
}

/// Symbol table entry, keyed by (scope, lexeme)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolTableEntry {
    pub lexeme: String,
    pub token_kind: TokenKind,
    pub data_type: Option<String>,
    pub scope: ScopeId,
    /// Lines the lexeme appears on, in first-seen order
    pub line_numbers: IndexSet<usize>,
    pub attributes: SymbolAttributes,
}

impl SymbolTableEntry {
    fn new(
        lexeme: &str,
        token_kind: TokenKind,
        data_type: Option<&str>,
        scope: ScopeId,
        line: usize,
    ) -> Self {
        let mut line_numbers = IndexSet::new();
        line_numbers.insert(line);
        Self {
            lexeme: lexeme.to_string(),
            token_kind,
            data_type: data_type.map(str::to_string),
            scope,
            line_numbers,
            attributes: SymbolAttributes::default(),
        }
    }

    pub fn is_constant(&self) -> bool {
        self.attributes.is_constant == Some(true)
    }
}

type SymbolKey = (ScopeId, String);

/// Symbol table manager
///
/// Owns the scope stack and every entry created during one analysis run.
#[derive(Debug, Default)]
pub struct SymbolTableManager {
    entries: IndexMap<SymbolKey, SymbolTableEntry>,
    scopes: ScopeStack,
    diagnostics: Vec<Diagnostic>,
}

impl SymbolTableManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost open scope
    pub fn current_scope(&self) -> &ScopeId {
        self.scopes.current()
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Record an identifier occurrence
    pub fn observe_identifier(
        &mut self,
        lexeme: &str,
        at: Position,
        is_declaration: bool,
        inferred_type: Option<&str>,
    ) {
        if is_declaration {
            self.declare(lexeme, at, inferred_type);
            return;
        }

        let found = self
            .scopes
            .innermost_first()
            .map(|scope| (scope.clone(), lexeme.to_string()))
            .find(|key| self.entries.contains_key(key));

        match found.and_then(|key| self.entries.get_mut(&key)) {
            Some(entry) => {
                entry.line_numbers.insert(at.line);
                if entry.data_type.is_none() {
                    entry.data_type = inferred_type.map(str::to_string);
                }
            }
            None => {
                let scope = self.current_scope().clone();
                tracing::debug!("New symbol '{}' in {}", lexeme, scope);
                let entry =
                    SymbolTableEntry::new(lexeme, TokenKind::Identifier, inferred_type, scope.clone(), at.line);
                self.entries.insert((scope, lexeme.to_string()), entry);
            }
        }
    }

    fn declare(
        &mut self,
        lexeme: &str,
        at: Position,
        declared_type: Option<&str>,
    ) {
        let scope = self.current_scope().clone();
        let key = (scope.clone(), lexeme.to_string());

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.line_numbers.insert(at.line);
            match (entry.data_type.clone(), declared_type) {
                (Some(existing), Some(new)) if existing != new => {
                    let message = format!(
                        "Redefinition of '{}' in {} with different type: {} vs {}",
                        lexeme, scope, existing, new
                    );
                    self.diagnostics
                        .push(Diagnostic::new(DiagnosticCode::Redefinition, message, at));
                }
                (None, Some(new)) => entry.data_type = Some(new.to_string()),
                _ => {}
            }
            return;
        }

        tracing::debug!(
            "Declared '{}' as {} in {}",
            lexeme,
            declared_type.unwrap_or("?"),
            scope
        );
        let entry = SymbolTableEntry::new(lexeme, TokenKind::Identifier, declared_type, scope, at.line);
        self.entries.insert(key, entry);
    }

    /// Record a literal constant in the global scope
    pub fn observe_literal(
        &mut self,
        lexeme: &str,
        kind: TokenKind,
        data_type: &str,
        value: Option<LiteralValue>,
        at: Position,
    ) {
        let key = (ScopeId::global(), lexeme.to_string());
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.line_numbers.insert(at.line);
            return;
        }

        let mut entry = SymbolTableEntry::new(lexeme, kind, Some(data_type), ScopeId::global(), at.line);
        entry.attributes = SymbolAttributes {
            is_constant: Some(true),
            value,
        };
        self.entries.insert(key, entry);
    }

    /// Open a child scope at the `{` found at `at`
    pub fn push_scope(
        &mut self,
        label: &ScopeLabel,
        at: Position,
    ) -> &ScopeId {
        let id = self.scopes.push(label, at);
        tracing::debug!("Enter scope {}", id);
        id
    }

    /// Close the innermost scope at the `}` found at `at`
    pub fn pop_scope(
        &mut self,
        at: Position,
    ) {
        match self.scopes.pop() {
            Some(frame) => tracing::debug!("Leave scope {}", frame.id),
            None => self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnmatchedClosingBrace,
                "Unmatched closing brace; already at global scope",
                at,
            )),
        }
    }

    /// Look up a lexeme from the innermost open scope outwards
    pub fn lookup(
        &self,
        lexeme: &str,
    ) -> Option<&SymbolTableEntry> {
        self.scopes
            .innermost_first()
            .find_map(|scope| self.entries.get(&(scope.clone(), lexeme.to_string())))
    }

    /// Entry of a lexeme in one specific scope
    pub fn get(
        &self,
        scope: &ScopeId,
        lexeme: &str,
    ) -> Option<&SymbolTableEntry> {
        self.entries.get(&(scope.clone(), lexeme.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in first-insertion order
    pub fn export_all(&self) -> Vec<SymbolTableEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Close the run: report scopes left open and hand over the table
    pub fn finish(mut self) -> (Vec<SymbolTableEntry>, Vec<Diagnostic>) {
        for frame in self.scopes.open_frames() {
            let at = frame.opened_at.unwrap_or_default();
            let message = format!("Scope {} is never closed", frame.id);
            self.diagnostics
                .push(Diagnostic::new(DiagnosticCode::UnclosedScope, message, at));
        }
        (self.entries.into_values().collect(), self.diagnostics)
    }
}
