//! Lexer module
//! Token scanner, language tables and the symbol table driven by the token
//! stream

pub mod hint;
pub mod literals;
pub mod observer;
pub mod scope;
pub mod state;
pub mod symbols;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use literals::LiteralValue;
pub use observer::SymbolObserver;
pub use scope::ScopeId;
pub use state::{Language, LanguageSpec};
pub use symbols::{SymbolAttributes, SymbolTableEntry, SymbolTableManager};
pub use tokenizer::Lexer;
pub use tokens::{Token, TokenKind};

use crate::util::diagnostic::Diagnostic;

/// Lazily scan `source`, yielding every token including whitespace and
/// comments
pub fn scan(
    source: &str,
    language: Language,
) -> Lexer<'_> {
    Lexer::new(source, language)
}

/// Significant tokens plus the scanner's diagnostics
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenize source code, dropping whitespace and comments
pub fn tokenize(
    source: &str,
    language: Language,
) -> TokenStream {
    tracing::debug!("Lexing {} bytes of {} source", source.len(), language);

    let mut lexer = scan(source, language);
    let mut tokens = Vec::new();
    for token in lexer.by_ref() {
        if token.kind.is_trivia() {
            continue;
        }
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("Lexing complete: {} tokens", tokens.len());
    TokenStream {
        tokens,
        diagnostics: lexer.take_diagnostics(),
    }
}

/// Log a token for debugging
pub(crate) fn log_token(token: &Token) {
    tracing::debug!(
        "{}:{} {} {:?}",
        token.line,
        token.column,
        token.kind,
        token.text
    );
}

#[cfg(test)]
mod tests;
