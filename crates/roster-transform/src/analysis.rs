//! Read-only analysis pass.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use roster_ingest::read_source_table;
use roster_model::{AnalysisReport, ColumnMapping, SourceTable, TagCount};
use tracing::{info, info_span};

use crate::error::Result;
use crate::normalization::{EmailStatus, classify_email, clean_tag_list};

/// Number of tags listed in [`AnalysisReport::top_tags`].
pub const TOP_TAG_LIMIT: usize = 5;

/// Read `input` and analyze it without writing anything.
pub fn analyze_export(input: &Path) -> Result<AnalysisReport> {
    let span = info_span!("analyze", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_source_table(input)?;
    let report = analyze_table(&table);

    info!(
        columns = report.column_count(),
        total_rows = report.total_rows,
        valid_emails = report.valid_emails,
        invalid_emails = report.invalid_emails,
        missing_emails = report.missing_emails,
        unique_emails = report.unique_emails,
        duplicate_emails = report.duplicate_emails,
        unique_tags = report.unique_tags,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(report)
}

/// Compute analysis statistics over an already parsed table.
///
/// Duplicates are counted across the whole file by lowercased address. Only
/// rows with a valid email contribute tags.
pub fn analyze_table(table: &SourceTable) -> AnalysisReport {
    let mapping = ColumnMapping::resolve(&table.headers);
    let mut report = AnalysisReport {
        headers: table.headers.clone(),
        ..AnalysisReport::default()
    };
    let mut email_counts: HashMap<String, usize> = HashMap::new();
    let mut tags = TagTally::default();

    for record in &table.records {
        report.total_rows += 1;
        match classify_email(record.field(&mapping.email)) {
            EmailStatus::Missing => report.missing_emails += 1,
            EmailStatus::Invalid => report.invalid_emails += 1,
            EmailStatus::Valid(email) => {
                report.valid_emails += 1;
                *email_counts.entry(email.to_lowercase()).or_default() += 1;
                for tag in clean_tag_list(record.field(&mapping.tags)) {
                    tags.add(tag);
                }
            }
        }
    }

    report.unique_emails = email_counts.len();
    report.duplicate_emails = email_counts.values().filter(|count| **count > 1).count();
    report.unique_tags = tags.len();
    report.top_tags = tags.most_common(TOP_TAG_LIMIT);
    report
}

/// Tag occurrence counts that remember first-seen order for tie breaking.
#[derive(Default)]
struct TagTally {
    index: HashMap<String, usize>,
    counts: Vec<TagCount>,
}

impl TagTally {
    fn add(&mut self, tag: String) {
        if let Some(&position) = self.index.get(&tag) {
            self.counts[position].count += 1;
            return;
        }
        self.index.insert(tag.clone(), self.counts.len());
        self.counts.push(TagCount { tag, count: 1 });
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn most_common(mut self, limit: usize) -> Vec<TagCount> {
        // Stable sort keeps first-seen order among equal counts.
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts.truncate(limit);
        self.counts
    }
}
