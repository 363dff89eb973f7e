//! Core algorithm layer
//! Token scanning and the symbol table it drives

pub mod lexer;

// Re-export commonly used items
pub use lexer::{scan, tokenize};
