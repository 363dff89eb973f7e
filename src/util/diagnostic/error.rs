//! Diagnostic data structures
//!
//! Analysis never fails on malformed input. Everything it notices along the
//! way is recorded as a [`Diagnostic`] and mirrored as a `tracing` event.
//! [`LexiscopeError`] is reserved for the outer, genuinely fallible
//! operations: reading files, loading configuration, serialising output.

use crate::util::span::Position;
use serde::Serialize;
use std::path::PathBuf;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Numeric rank, higher is more severe
    pub fn as_u8(&self) -> u8 {
        match self {
            Severity::Error => 3,
            Severity::Warning => 2,
            Severity::Info => 1,
        }
    }

    /// Check if this is the error level
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Registered diagnostic codes
///
/// E0xxx: lexical, E2xxx: scopes and symbols, E5xxx: three-address code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    #[serde(rename = "E0001")]
    InvalidCharacter,
    #[serde(rename = "E0002")]
    UnterminatedString,
    #[serde(rename = "E0003")]
    UnterminatedComment,
    #[serde(rename = "E0004")]
    InvalidNumber,
    #[serde(rename = "E2001")]
    UnmatchedClosingBrace,
    #[serde(rename = "E2002")]
    UnclosedScope,
    #[serde(rename = "E2003")]
    Redefinition,
    #[serde(rename = "E5001")]
    EmptyAssignment,
    #[serde(rename = "E5002")]
    MalformedIf,
    #[serde(rename = "E5003")]
    MalformedExpression,
}

impl DiagnosticCode {
    /// Code string, e.g. `E0001`
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidCharacter => "E0001",
            DiagnosticCode::UnterminatedString => "E0002",
            DiagnosticCode::UnterminatedComment => "E0003",
            DiagnosticCode::InvalidNumber => "E0004",
            DiagnosticCode::UnmatchedClosingBrace => "E2001",
            DiagnosticCode::UnclosedScope => "E2002",
            DiagnosticCode::Redefinition => "E2003",
            DiagnosticCode::EmptyAssignment => "E5001",
            DiagnosticCode::MalformedIf => "E5002",
            DiagnosticCode::MalformedExpression => "E5003",
        }
    }

    /// Severity every diagnostic with this code is reported at
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::InvalidCharacter
            | DiagnosticCode::MalformedIf
            | DiagnosticCode::MalformedExpression => Severity::Error,
            DiagnosticCode::UnterminatedString
            | DiagnosticCode::UnterminatedComment
            | DiagnosticCode::InvalidNumber
            | DiagnosticCode::UnmatchedClosingBrace
            | DiagnosticCode::Redefinition
            | DiagnosticCode::EmptyAssignment => Severity::Warning,
            DiagnosticCode::UnclosedScope => Severity::Info,
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal finding, already rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Diagnostic {
    /// Create a diagnostic at `position`; severity follows the code.
    ///
    /// The matching `tracing` event is emitted here so that every recorded
    /// diagnostic also shows up in the log.
    pub fn new(
        code: DiagnosticCode,
        message: impl Into<String>,
        position: Position,
    ) -> Self {
        let diagnostic = Self {
            severity: code.severity(),
            code,
            message: message.into(),
            position,
        };
        match diagnostic.severity {
            Severity::Error => tracing::error!("{}", diagnostic),
            Severity::Warning => tracing::warn!("{}", diagnostic),
            Severity::Info => tracing::info!("{}", diagnostic),
        }
        diagnostic
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.code, self.position, self.message
        )
    }
}

/// Errors of the fallible outer operations
#[derive(Debug, thiserror::Error)]
pub enum LexiscopeError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Cannot infer language from '{0}', pass --language")]
    UnknownLanguage(String),
}
