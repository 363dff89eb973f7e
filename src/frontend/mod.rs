//! Analysis pipeline
//!
//! Runs the scanner, feeds every significant token to the symbol observer
//! as it is produced, then computes lexeme statistics and three-address
//! code over the final token list.

use crate::middle::tac::TacGenerator;
use crate::util::diagnostic::{Diagnostic, Severity};
use serde::Serialize;
use tracing::debug;

pub mod core;
pub mod request;
pub mod stats;

pub use self::core::lexer::{Language, SymbolTableEntry, Token, TokenKind};
pub use request::FlowRequest;
pub use stats::{compute_stats, LexemeStat};

use self::core::lexer::{log_token, scan, SymbolObserver};

/// Everything one analysis run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Significant tokens, error tokens included
    pub tokens: Vec<Token>,
    /// Symbol table in first-insertion order
    pub symbol_table: Vec<SymbolTableEntry>,
    pub lexeme_stats: Vec<LexemeStat>,
    /// Rendered three-address code
    pub tac: Vec<String>,
    /// Non-fatal findings ordered by position
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Diagnostics at error severity
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Diagnostics at or above `severity`
    pub fn diagnostics_at_least(
        &self,
        severity: Severity,
    ) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity >= severity)
    }

    /// Error tokens, one per unrecognised character
    pub fn error_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Error)
    }
}

/// Analyzer for one language
///
/// Holds no state between runs: every call builds its own symbol table,
/// counters and diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    language: Language,
}

impl Analyzer {
    /// Create a new analyzer
    #[inline]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Analyze source code
    pub fn analyze(
        &self,
        source: &str,
    ) -> AnalysisResult {
        debug!("Analyzing {} source ({} bytes)", self.language, source.len());

        let mut lexer = scan(source, self.language);
        let mut observer = SymbolObserver::new(self.language);
        let mut tokens = Vec::new();
        for token in lexer.by_ref() {
            if token.kind.is_trivia() {
                continue;
            }
            log_token(&token);
            observer.observe(&token);
            tokens.push(token);
        }
        debug!("Scanned {} tokens", tokens.len());

        let mut diagnostics = lexer.take_diagnostics();
        let (symbol_table, symbol_diagnostics) = observer.finish();
        diagnostics.extend(symbol_diagnostics);
        debug!("Symbol table has {} entries", symbol_table.len());

        let lexeme_stats = compute_stats(&tokens);

        let tac = TacGenerator::new().generate(&tokens);
        let rendered = tac.rendered();
        diagnostics.extend(tac.diagnostics);

        diagnostics.sort_by_key(|d| (d.position.line, d.position.column));

        AnalysisResult {
            tokens,
            symbol_table,
            lexeme_stats,
            tac: rendered,
            diagnostics,
        }
    }
}

/// Analyze `source` written in `language`
pub fn analyze(
    source: &str,
    language: Language,
) -> AnalysisResult {
    Analyzer::new(language).analyze(source)
}

#[cfg(test)]
mod tests;
