//! 表达式展平

use super::{TacGenerator, TacInstruction, MALFORMED_EXPRESSION};
use crate::frontend::core::lexer::{Token, TokenKind};
use crate::util::diagnostic::DiagnosticCode;

/// Binary operators the flattener understands
pub const BINARY_OPERATORS: &[&str] = &["+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">="];

/// Relational operators allowed inline in an `if_false` condition
pub const RELATIONAL_OPERATORS: &[&str] = &["==", "!=", "<", ">", "<=", ">="];

/// Tokens usable as an operand
fn is_operand(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::LiteralString
            | TokenKind::LiteralNumber
            | TokenKind::LiteralBoolean
            | TokenKind::LiteralChar
    )
}

fn is_binary_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator && BINARY_OPERATORS.contains(&token.text.as_str())
}

impl TacGenerator {
    /// 展平表达式
    ///
    /// Emits one temporary per operator, left to right, and returns the
    /// operand holding the result. `expr` must not be empty.
    pub fn flatten_expr(
        &mut self,
        expr: &[&Token],
    ) -> String {
        let Some((first, rest)) = expr.split_first() else {
            return MALFORMED_EXPRESSION.to_string();
        };

        let mut left = first.text.clone();
        let mut consumed = false;
        for pair in rest.chunks(2) {
            match pair {
                [op, right] if is_binary_operator(op) && is_operand(right) => {
                    let dest = self.temps.next().to_string();
                    self.emit(TacInstruction::Binary {
                        dest: dest.clone(),
                        left,
                        op: op.text.clone(),
                        right: right.text.clone(),
                    });
                    left = dest;
                    consumed = true;
                }
                [op, ..] if !consumed && !is_binary_operator(op) => return first.text.clone(),
                _ => {
                    let message = format!("Malformed expression near '{}'", pair[0].text);
                    self.report(DiagnosticCode::MalformedExpression, message, pair[0].position());
                    return MALFORMED_EXPRESSION.to_string();
                }
            }
        }
        left
    }

    /// Render an `if` condition: `a relop b` stays inline, anything else is
    /// flattened first
    pub fn condition_operand(
        &mut self,
        cond: &[&Token],
    ) -> String {
        if let [a, op, b] = cond {
            if op.kind == TokenKind::Operator
                && RELATIONAL_OPERATORS.contains(&op.text.as_str())
                && is_operand(a)
                && is_operand(b)
            {
                return format!("{} {} {}", a.text, op.text, b.text);
            }
        }
        self.flatten_expr(cond)
    }
}
