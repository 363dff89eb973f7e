//! Terminal rendering of diagnostics

use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::span::SourceFile;
use owo_colors::OwoColorize;

/// Emitter configuration
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Enable colored output
    pub use_colors: bool,
    /// Show the offending source line with an indicator
    pub show_source: bool,
    /// Indicator character (default: `^`)
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
            indicator: '^',
        }
    }
}

/// Text diagnostic emitter
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    /// Create an emitter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an emitter with a custom configuration
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Render one diagnostic, optionally against its source file
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> String {
        let mut output = self.render_header(diagnostic);

        let file_name = source_file
            .map(|sf| sf.name.as_str())
            .unwrap_or("<unknown>");
        output.push_str(&format!(
            " --> {}:{}:{}\n",
            file_name, diagnostic.position.line, diagnostic.position.column
        ));

        if self.config.show_source {
            if let Some(snippet) = source_file.and_then(|sf| self.render_snippet(diagnostic, sf)) {
                output.push_str(&snippet);
            }
        }
        output
    }

    /// Render every diagnostic, one block each
    pub fn render_all(
        &self,
        diagnostics: &[Diagnostic],
        source_file: Option<&SourceFile>,
    ) -> String {
        diagnostics
            .iter()
            .map(|d| self.render(d, source_file))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_header(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let severity = diagnostic.severity.to_string();
        let severity = if self.config.use_colors {
            match diagnostic.severity {
                Severity::Error => severity.red().bold().to_string(),
                Severity::Warning => severity.yellow().bold().to_string(),
                Severity::Info => severity.cyan().bold().to_string(),
            }
        } else {
            severity
        };
        let code = if self.config.use_colors {
            diagnostic.code.as_str().bold().to_string()
        } else {
            diagnostic.code.as_str().to_string()
        };
        format!("{} [{}] {}\n", severity, code, diagnostic.message)
    }

    fn render_snippet(
        &self,
        diagnostic: &Diagnostic,
        source_file: &SourceFile,
    ) -> Option<String> {
        let line = diagnostic.position.line;
        let text = source_file.line_text(line)?;
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        let marker = format!(
            "{}{}",
            " ".repeat(diagnostic.position.column.saturating_sub(1)),
            self.config.indicator
        );
        let marker = if self.config.use_colors {
            marker.red().to_string()
        } else {
            marker
        };
        Some(format!(
            "{pad} |\n{gutter} | {text}\n{pad} | {marker}\n"
        ))
    }
}
