//! Three-address instructions

use super::flow::Label;

/// One TAC instruction, at most one operator per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstruction {
    /// `dest = left op right`
    Binary {
        dest: String,
        left: String,
        op: String,
        right: String,
    },
    /// `dest = src`
    Copy { dest: String, src: String },
    /// `if_false cond goto label`
    IfFalse { cond: String, target: Label },
    /// `label:`
    Label(Label),
}

impl std::fmt::Display for TacInstruction {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            TacInstruction::Binary {
                dest,
                left,
                op,
                right,
            } => write!(f, "{} = {} {} {}", dest, left, op, right),
            TacInstruction::Copy { dest, src } => write!(f, "{} = {}", dest, src),
            TacInstruction::IfFalse { cond, target } => write!(f, "if_false {} goto {}", cond, target),
            TacInstruction::Label(label) => write!(f, "{}:", label),
        }
    }
}
