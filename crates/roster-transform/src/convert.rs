//! Conversion pass: validate, deduplicate, clean and write.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use roster_ingest::read_source_table;
use roster_model::{
    ColumnMapping, ConvertOptions, DuplicatePolicy, RunStatistics, SkipReason, SourceTable,
};
use roster_output::ContactWriter;
use tracing::{debug, info, info_span};

use crate::contact::normalize_record;
use crate::error::Result;
use crate::redact::redact_value;

/// Result of a completed conversion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub stats: RunStatistics,
}

/// Read `input`, convert every row and write the import file.
pub fn convert_export(input: &Path, options: &ConvertOptions) -> Result<ConversionOutcome> {
    let span = info_span!(
        "convert",
        input = %input.display(),
        output = %options.output_path.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_source_table(input)?;
    let mut writer = ContactWriter::create(&options.output_path)?;
    let stats = convert_table(&table, options.duplicate_policy, &mut writer)?;
    writer.finish()?;

    info!(
        total_rows = stats.total_rows,
        processed = stats.processed,
        skipped = stats.skipped,
        duplicates = stats.duplicates,
        invalid_emails = stats.invalid_emails,
        missing_emails = stats.missing_emails,
        tags_cleaned = stats.tags_cleaned,
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(ConversionOutcome {
        output_path: options.output_path.clone(),
        stats,
    })
}

/// Convert a parsed table into `writer`, returning the pass counters.
///
/// Rules per row, first match wins: missing/invalid email is skipped; a
/// repeated address (case-insensitive) is skipped under
/// [`DuplicatePolicy::Remove`]; anything else is cleaned and written.
pub fn convert_table<W: Write>(
    table: &SourceTable,
    policy: DuplicatePolicy,
    writer: &mut ContactWriter<W>,
) -> Result<RunStatistics> {
    let mapping = ColumnMapping::resolve(&table.headers);
    debug!(
        email = %mapping.email,
        first_name = %mapping.first_name,
        last_name = %mapping.last_name,
        tags = %mapping.tags,
        "resolved source columns"
    );

    let mut stats = RunStatistics::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, record) in table.records.iter().enumerate() {
        stats.total_rows += 1;
        let row = index + 1;

        let contact = match normalize_record(record, &mapping) {
            Ok(contact) => contact,
            Err(reason) => {
                debug!(
                    row,
                    email = redact_value(record.field(&mapping.email)),
                    %reason,
                    "skipping row"
                );
                stats.record_skip(reason);
                continue;
            }
        };

        let key = contact.email_key();
        if policy == DuplicatePolicy::Remove && seen.contains(&key) {
            debug!(
                row,
                email = redact_value(&contact.email),
                reason = %SkipReason::DuplicateEmail,
                "skipping row"
            );
            stats.record_skip(SkipReason::DuplicateEmail);
            continue;
        }
        seen.insert(key);

        if contact.has_tags() {
            stats.tags_cleaned += 1;
        }
        writer.write_contact(&contact)?;
        stats.processed += 1;
    }

    Ok(stats)
}
