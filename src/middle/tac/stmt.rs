//! 语句代码生成
//!
//! Assignments and `if` headers. Every method returns the cursor position
//! to continue from.

use super::{TacGenerator, TacInstruction};
use crate::frontend::core::lexer::Token;
use crate::util::diagnostic::DiagnosticCode;

impl TacGenerator {
    /// `dest = ... ;` starting at `cursor`
    pub(super) fn generate_assignment(
        &mut self,
        tokens: &[&Token],
        cursor: usize,
    ) -> usize {
        let dest = tokens[cursor];
        let rhs_start = cursor + 2;
        let end = tokens[rhs_start..]
            .iter()
            .position(|t| t.is_punct(";"))
            .map(|i| rhs_start + i)
            .unwrap_or(tokens.len());

        let rhs = &tokens[rhs_start..end];
        if rhs.is_empty() {
            let message = format!("Assignment to '{}' has no right-hand side", dest.text);
            self.report(DiagnosticCode::EmptyAssignment, message, tokens[cursor + 1].position());
        } else {
            let src = self.flatten_expr(rhs);
            self.emit(TacInstruction::Copy {
                dest: dest.text.clone(),
                src,
            });
        }

        (end + 1).min(tokens.len())
    }

    /// `if ( ... )` starting at `cursor`; the body is left to the main loop
    pub(super) fn generate_if_header(
        &mut self,
        tokens: &[&Token],
        cursor: usize,
    ) -> usize {
        let if_token = tokens[cursor];
        let Some(close) = header_close(tokens, cursor + 1) else {
            self.report(
                DiagnosticCode::MalformedIf,
                "Malformed if header: expected a balanced '( ... )'".to_string(),
                if_token.position(),
            );
            return cursor + 1;
        };

        let cond = &tokens[cursor + 2..close];
        if cond.is_empty() {
            self.report(
                DiagnosticCode::MalformedIf,
                "Malformed if header: empty condition".to_string(),
                if_token.position(),
            );
            return cursor + 1;
        }

        let cond = self.condition_operand(cond);
        let target = self.labels.next();
        self.emit(TacInstruction::IfFalse { cond, target });
        self.emit(TacInstruction::Label(target));
        close + 1
    }
}

/// Index of the `)` matching the `(` at `open`
fn header_close(
    tokens: &[&Token],
    open: usize,
) -> Option<usize> {
    if !tokens.get(open)?.is_punct("(") {
        return None;
    }
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.is_punct("(") {
            depth += 1;
        } else if token.is_punct(")") {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}
