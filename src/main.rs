//! Lexiscope - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexiscope::report::{render_text, ReportOptions};
use lexiscope::samples::sample_code;
use lexiscope::util::config::{AnalyzerConfig, OutputFormat};
use lexiscope::util::logger::{self, LogLevel};
use lexiscope::util::span::SourceFile;
use lexiscope::{analyze, read_source, AnalysisResult, FlowRequest, Language, NAME, VERSION};
use std::path::{Path, PathBuf};

/// Lexical analyzer for Java/C++-like source: tokens, symbol table, lexeme
/// statistics and three-address code
#[derive(Parser, Debug)]
#[command(name = "lexiscope")]
#[command(author = "Lexiscope Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Source language (default: from the file extension, then the config)
    #[arg(short, long, global = true, value_enum)]
    language: Option<Language>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a source file
    Analyze {
        /// Source file to analyze
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Analyze code given on the command line
    Eval {
        /// Code to analyze
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Analyze the built-in sample program
    Sample,

    /// Print the request payload for the external analysis flows
    Request {
        /// Source file to wrap
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AnalyzerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.verbose {
        config.log_level = LogLevel::Debug;
    }
    if args.no_color {
        config.color = false;
    }
    logger::init_with_level(config.log_level);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    match args.command {
        Commands::Analyze { file } => {
            let language = resolve_language(args.language, &file, &config);
            let source = read_source(&file).with_context(|| format!("Failed to analyze: {}", file.display()))?;
            let source = SourceFile::new(file.display().to_string(), source);
            let result = analyze(&source.content, language);
            print_result(&result, &source, &config)?;
        }
        Commands::Eval { code } => {
            let language = args.language.unwrap_or(config.language);
            let source = SourceFile::new("<eval>".to_string(), code);
            let result = analyze(&source.content, language);
            print_result(&result, &source, &config)?;
        }
        Commands::Sample => {
            let language = args.language.unwrap_or(config.language);
            let source = SourceFile::new(format!("<sample.{}>", language), sample_code(language).to_string());
            let result = analyze(&source.content, language);
            print_result(&result, &source, &config)?;
        }
        Commands::Request { file } => {
            let language = resolve_language(args.language, &file, &config);
            let code = read_source(&file).with_context(|| format!("Failed to read: {}", file.display()))?;
            let request = FlowRequest::new(code, language);
            println!("{}", request.to_json().context("Failed to serialize request")?);
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// CLI flag, then file extension, then config
fn resolve_language(
    flag: Option<Language>,
    file: &Path,
    config: &AnalyzerConfig,
) -> Language {
    flag.or_else(|| Language::from_path(file))
        .unwrap_or(config.language)
}

fn print_result(
    result: &AnalysisResult,
    source: &SourceFile,
    config: &AnalyzerConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let options = ReportOptions {
                color: config.color,
                show_diagnostics: config.show_diagnostics,
            };
            print!("{}", render_text(result, Some(source), &options));
        }
    }
    Ok(())
}
