//! Lexiscope
//!
//! A lexical analyzer for a simplified Java/C++-like language. One call to
//! [`analyze`] tokenizes the source, builds a scoped symbol table, computes
//! lexeme statistics and emits naive three-address code.
//!
//! # Example
//!
//! ```
//! use lexiscope::{analyze, Language};
//!
//! let result = analyze("a = b + c * d;", Language::Java);
//! assert_eq!(result.tac, vec!["t1 = b + c", "t2 = t1 * d", "a = t2"]);
//! ```

#![doc(html_root_url = "https://docs.rs/lexiscope")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;
pub mod report;
pub mod samples;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::{analyze, AnalysisResult, Analyzer, FlowRequest, Language, Token, TokenKind};
pub use util::diagnostic::{Diagnostic, LexiscopeError, Result};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "Lexiscope";

/// Read a source file and analyze it.
///
/// The language comes from the file extension when it is recognised,
/// otherwise `fallback` is used.
pub fn analyze_file(
    path: &Path,
    fallback: Language,
) -> Result<AnalysisResult> {
    let language = Language::from_path(path).unwrap_or(fallback);
    debug!("Analyzing file {} as {}", path.display(), language);
    let source = read_source(path)?;
    Ok(analyze(&source, language))
}

/// Read a source file
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LexiscopeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the collaborator payload for a source file
pub fn flow_request_for_file(
    path: &Path,
    fallback: Language,
) -> Result<FlowRequest> {
    let language = Language::from_path(path).unwrap_or(fallback);
    Ok(FlowRequest::new(read_source(path)?, language))
}
