//! Text report of an analysis result
//!
//! Four aligned tables (tokens, symbol table, lexeme statistics,
//! three-address code) followed by the diagnostics.

use crate::frontend::AnalysisResult;
use crate::util::diagnostic::{EmitterConfig, TextEmitter};
use crate::util::span::SourceFile;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Report options
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub color: bool,
    pub show_diagnostics: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_diagnostics: true,
        }
    }
}

/// Column-aligned plain text table
#[derive(Debug, Default)]
struct Table {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: Vec<&'static str>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    fn row(
        &mut self,
        cells: Vec<String>,
    ) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render(
        &self,
        color: bool,
    ) -> String {
        let widths = self.widths();
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let header: Vec<String> = self.header.iter().map(|h| h.to_string()).collect();
        let header = line(&header);
        let mut out = String::new();
        if color {
            let _ = writeln!(out, "{}", header.bold());
        } else {
            let _ = writeln!(out, "{}", header);
        }
        for row in &self.rows {
            let _ = writeln!(out, "{}", line(row));
        }
        out
    }
}

fn section(
    out: &mut String,
    title: &str,
    color: bool,
) {
    if !out.is_empty() {
        out.push('\n');
    }
    if color {
        let _ = writeln!(out, "{}", format!("== {} ==", title).cyan().bold());
    } else {
        let _ = writeln!(out, "== {} ==", title);
    }
}

/// Render `result` as text. `source` enables source snippets under the
/// diagnostics.
pub fn render_text(
    result: &AnalysisResult,
    source: Option<&SourceFile>,
    options: &ReportOptions,
) -> String {
    let mut out = String::new();

    section(&mut out, "TOKENS", options.color);
    let mut tokens = Table::new(vec!["LINE", "COL", "KIND", "LEXEME"]);
    for token in &result.tokens {
        tokens.row(vec![
            token.line.to_string(),
            token.column.to_string(),
            token.kind.to_string(),
            token.text.clone(),
        ]);
    }
    out.push_str(&tokens.render(options.color));

    section(&mut out, "SYMBOL TABLE", options.color);
    let mut symbols = Table::new(vec!["LEXEME", "KIND", "TYPE", "SCOPE", "LINES", "VALUE"]);
    for entry in &result.symbol_table {
        let lines = entry
            .line_numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let value = match &entry.attributes.value {
            Some(value) => serde_json::to_string(value).unwrap_or_default(),
            None => String::new(),
        };
        symbols.row(vec![
            entry.lexeme.clone(),
            entry.token_kind.to_string(),
            entry.data_type.clone().unwrap_or_else(|| "-".to_string()),
            entry.scope.to_string(),
            lines,
            value,
        ]);
    }
    out.push_str(&symbols.render(options.color));

    section(&mut out, "LEXEME STATISTICS", options.color);
    let mut stats = Table::new(vec!["KIND", "COUNT", "FREQUENCY"]);
    for stat in &result.lexeme_stats {
        stats.row(vec![
            stat.kind.to_string(),
            stat.count.to_string(),
            format!("{:.2}%", stat.frequency * 100.0),
        ]);
    }
    out.push_str(&stats.render(options.color));

    section(&mut out, "THREE-ADDRESS CODE", options.color);
    for instruction in &result.tac {
        // labels flush left, everything else indented
        if instruction.ends_with(':') {
            let _ = writeln!(out, "{}", instruction);
        } else {
            let _ = writeln!(out, "    {}", instruction);
        }
    }

    if options.show_diagnostics && !result.diagnostics.is_empty() {
        section(&mut out, "DIAGNOSTICS", options.color);
        let emitter = TextEmitter::with_config(EmitterConfig {
            use_colors: options.color,
            ..EmitterConfig::default()
        });
        out.push_str(&emitter.render_all(&result.diagnostics, source));
    }

    out
}
