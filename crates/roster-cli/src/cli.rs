//! CLI argument definitions for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{ColumnListing, ConvertOptions, DuplicatePolicy};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Convert MailChimp subscriber exports to ConvertKit format",
    long_about = "Clean and prepare MailChimp subscriber exports for importing into ConvertKit.\n\n\
                  Validates email addresses, removes duplicates, normalizes names and\n\
                  cleans tag lists, then writes ConvertKit's import columns.",
    after_help = "Examples:\n  \
                  roster subscribers.csv\n  \
                  roster subscribers.csv -o cleaned.csv\n  \
                  roster subscribers.csv --keep-duplicates --verbose\n  \
                  roster subscribers.csv --analyze-only"
)]
pub struct Cli {
    /// Path to the MailChimp export CSV file.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file path (default: <INPUT_STEM>_convertkit_ready.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep duplicate email addresses instead of dropping repeats.
    #[arg(long = "keep-duplicates")]
    pub keep_duplicates: bool,

    /// Only analyze the input file without converting.
    #[arg(long = "analyze-only")]
    pub analyze_only: bool,

    /// Adjust verbosity (-v lists every column and shows full error details; -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw row values (email addresses) in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// True when at least one `-v` was given.
    pub fn is_verbose(&self) -> bool {
        self.verbosity.tracing_level_filter() > LevelFilter::WARN
    }

    /// Run options derived from the flags.
    pub fn convert_options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::for_input(&self.input_file)
            .with_duplicate_policy(if self.keep_duplicates {
                DuplicatePolicy::Keep
            } else {
                DuplicatePolicy::Remove
            })
            .with_column_listing(if self.is_verbose() {
                ColumnListing::Full
            } else {
                ColumnListing::Preview
            });
        if let Some(path) = &self.output {
            options = options.with_output_path(path);
        }
        options
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
