//! lexiscope configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. --config <FILE>
//! 3. LEXISCOPE_CONFIG environment variable (path to a JSON file)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lexiscope::util::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::default();
//! assert!(config.show_diagnostics);
//! ```

use crate::frontend::core::lexer::Language;
use crate::util::diagnostic::{LexiscopeError, Result};
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "LEXISCOPE_CONFIG";

/// Output format of the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Text,
    /// The whole analysis result as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Language used when it cannot be inferred from a file extension
    #[serde(default)]
    pub language: Language,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
    /// Print collected diagnostics after the result tables
    #[serde(default = "default_true")]
    pub show_diagnostics: bool,
    /// Colored text output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            format: OutputFormat::default(),
            log_level: LogLevel::default(),
            show_diagnostics: true,
            color: true,
        }
    }
}

impl AnalyzerConfig {
    /// Load a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LexiscopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| LexiscopeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolve the config file to load: an explicit path wins over the
    /// environment variable, and no file at all yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match config_path(explicit, from_env.as_deref()) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

fn config_path<'a>(
    explicit: Option<&'a Path>,
    from_env: Option<&'a Path>,
) -> Option<&'a Path> {
    explicit.or(from_env)
}
