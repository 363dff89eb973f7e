//! Three-address code tests


use crate::frontend::core::lexer::{tokenize, Language};
use crate::middle::tac::{TacGenerator, TacOutput};

/// Tokenize Java source and generate code for it
pub(super) fn tac(source: &str) -> TacOutput {
    let tokens = tokenize(source, Language::Java).tokens;
    TacGenerator::new().generate(&tokens)
}

pub(super) fn lines(source: &str) -> Vec<String> {
    tac(source).rendered()
}
