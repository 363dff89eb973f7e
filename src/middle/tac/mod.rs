//! 三地址码生成器
//!
//! Pattern-matches assignments and `if` headers in a token stream and emits
//! linear three-address code. Expressions are flattened strictly left to
//! right; there is no operator precedence.

pub mod expr;
pub mod flow;
pub mod instruction;
pub mod stmt;

use crate::frontend::core::lexer::{Token, TokenKind};
use crate::util::diagnostic::{Diagnostic, DiagnosticCode};
use crate::util::span::Position;
use tracing::debug;

pub use flow::{Label, LabelGenerator, Temp, TempGenerator};
pub use instruction::TacInstruction;

/// Placeholder operand emitted for an expression that cannot be flattened
pub const MALFORMED_EXPRESSION: &str = "ERROR_MALFORMED_EXPRESSION";

/// Result of one generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TacOutput {
    pub instructions: Vec<TacInstruction>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TacOutput {
    /// Instructions rendered one per line
    pub fn rendered(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

/// 三地址码生成上下文
///
/// One context per run: counters, emitted code and diagnostics all start
/// empty.
#[derive(Debug, Default)]
pub struct TacGenerator {
    temps: TempGenerator,
    labels: LabelGenerator,
    instructions: Vec<TacInstruction>,
    diagnostics: Vec<Diagnostic>,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `tokens` and emit code for every recognised construct.
    ///
    /// Whitespace, comments and error tokens are skipped.
    pub fn generate(
        mut self,
        tokens: &[Token],
    ) -> TacOutput {
        let tokens: Vec<&Token> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia() && t.kind != TokenKind::Error)
            .collect();

        let mut cursor = 0;
        while cursor < tokens.len() {
            cursor = if is_assignment_start(&tokens, cursor) {
                self.generate_assignment(&tokens, cursor)
            } else if tokens[cursor].is_keyword("if") {
                self.generate_if_header(&tokens, cursor)
            } else {
                cursor + 1
            };
        }

        debug!("Generated {} TAC instructions", self.instructions.len());
        TacOutput {
            instructions: self.instructions,
            diagnostics: self.diagnostics,
        }
    }

    fn emit(
        &mut self,
        instruction: TacInstruction,
    ) {
        debug!("TAC: {}", instruction);
        self.instructions.push(instruction);
    }

    fn report(
        &mut self,
        code: DiagnosticCode,
        message: String,
        at: Position,
    ) {
        self.diagnostics.push(Diagnostic::new(code, message, at));
    }
}

/// `IDENTIFIER '='` at `cursor`
fn is_assignment_start(
    tokens: &[&Token],
    cursor: usize,
) -> bool {
    tokens[cursor].kind == TokenKind::Identifier
        && tokens.get(cursor + 1).is_some_and(|t| t.is_op("="))
}

/// Generate TAC for a token stream, rendered one instruction per line
pub fn generate_tac(tokens: &[Token]) -> Vec<String> {
    TacGenerator::new().generate(tokens).rendered()
}

#[cfg(test)]
mod tests;
