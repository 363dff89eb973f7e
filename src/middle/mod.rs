//! Code generation over the token stream
//!
//! There is no AST: the three-address code generator pattern-matches the
//! filtered token list directly.

pub mod tac;

pub use tac::{generate_tac, TacGenerator, TacInstruction, TacOutput};
