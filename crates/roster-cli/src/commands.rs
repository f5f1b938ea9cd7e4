use anyhow::{Context, Result};
use tracing::info;

use roster_ingest::ensure_input_exists;
use roster_transform::{analyze_export, convert_export};

use roster_cli::cli::Cli;

use crate::summary::{print_analysis, print_conversion, print_import_instructions};

/// Analyze the export, then convert it unless `--analyze-only` was given.
pub fn run_convert(cli: &Cli) -> Result<()> {
    let input = cli.input_file();
    ensure_input_exists(input)?;
    let options = cli.convert_options();

    let report =
        analyze_export(input).with_context(|| format!("analyze {}", input.display()))?;
    print_analysis(&report, options.column_listing);

    if cli.analyze_only {
        info!("analyze-only mode, skipping conversion");
        return Ok(());
    }

    let outcome = convert_export(input, &options)
        .with_context(|| format!("convert {}", input.display()))?;
    print_conversion(&outcome);
    print_import_instructions(&outcome.output_path);
    Ok(())
}
