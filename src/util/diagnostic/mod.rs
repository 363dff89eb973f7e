//! Diagnostics
//!
//! - [`error`] - diagnostic data (Diagnostic, Severity, DiagnosticCode) and
//!   the crate error type
//! - [`emitter`] - terminal rendering

pub mod emitter;
pub mod error;

pub use emitter::{EmitterConfig, TextEmitter};
pub use error::{Diagnostic, DiagnosticCode, LexiscopeError, Severity};

/// Result type of the fallible outer operations
pub type Result<T> = std::result::Result<T, LexiscopeError>;
