//! MailChimp to ConvertKit subscriber export converter.

use clap::{ColorChoice, Parser};
use roster_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_ingest::IngestError;
use roster_transform::TransformError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod commands;
mod summary;

use crate::commands::run_convert;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_convert(&cli) {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error, cli.is_verbose());
            1
        }
    };
    std::process::exit(exit_code);
}

/// Print a fatal error. A missing input is reported on its own; anything else
/// gets the full cause chain only in verbose mode.
fn report_error(error: &anyhow::Error, verbose: bool) {
    if is_missing_input(error) {
        eprintln!("error: {error}");
    } else if verbose {
        eprintln!("error: unexpected failure: {error:?}");
    } else {
        eprintln!("error: unexpected failure: {error:#}");
    }
}

fn is_missing_input(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<IngestError>()
            .is_some_and(IngestError::is_not_found)
            || cause
                .downcast_ref::<TransformError>()
                .is_some_and(TransformError::is_input_not_found)
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
