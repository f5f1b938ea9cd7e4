use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{AnalysisReport, ColumnListing, RunStatistics};
use roster_transform::ConversionOutcome;

/// Headers listed before truncating in preview mode.
const COLUMN_PREVIEW: usize = 5;

pub fn print_analysis(report: &AnalysisReport, listing: ColumnListing) {
    println!();
    println!("Analyzing MailChimp export");
    println!();
    println!("Found {} columns:", report.column_count());
    println!("{}", column_table(&report.headers, listing));
    if listing == ColumnListing::Preview && report.column_count() > COLUMN_PREVIEW {
        println!(
            "  ... and {} more columns",
            report.column_count() - COLUMN_PREVIEW
        );
    }

    println!();
    println!("Statistics:");
    let mut table = stat_table();
    add_stat(&mut table, "Total rows", report.total_rows, None);
    add_stat(&mut table, "Valid emails", report.valid_emails, None);
    add_stat(
        &mut table,
        "Invalid emails",
        report.invalid_emails,
        Some(Color::Red),
    );
    add_stat(
        &mut table,
        "Missing emails",
        report.missing_emails,
        Some(Color::Yellow),
    );
    add_stat(&mut table, "Unique emails", report.unique_emails, None);
    add_stat(
        &mut table,
        "Duplicate emails",
        report.duplicate_emails,
        Some(Color::Yellow),
    );
    println!("{table}");

    if report.top_tags.is_empty() {
        return;
    }
    println!();
    println!("Tags found ({} unique):", report.unique_tags);
    let mut tags = Table::new();
    tags.set_header(vec![header_cell("Tag"), header_cell("Contacts")]);
    apply_table_style(&mut tags);
    align_column(&mut tags, 1, CellAlignment::Right);
    for tag in &report.top_tags {
        tags.add_row(vec![Cell::new(&tag.tag), Cell::new(tag.count)]);
    }
    println!("{tags}");
    if report.remaining_tags() > 0 {
        println!("  ... and {} more tags", report.remaining_tags());
    }
}

pub fn print_conversion(outcome: &ConversionOutcome) {
    let stats: &RunStatistics = &outcome.stats;
    println!();
    println!("Conversion complete");
    println!("Output: {}", outcome.output_path.display());
    let mut table = stat_table();
    add_stat(&mut table, "Contacts processed", stats.processed, None);
    add_stat(&mut table, "Contacts skipped", stats.skipped, Some(Color::Yellow));
    add_detail(&mut table, "invalid email", stats.invalid_emails);
    add_detail(&mut table, "missing email", stats.missing_emails);
    add_detail(&mut table, "duplicate email", stats.duplicates);
    add_stat(&mut table, "Tags cleaned", stats.tags_cleaned, None);
    println!("{table}");
}

pub fn print_import_instructions(output: &Path) {
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    println!();
    println!("Import instructions for ConvertKit:");
    println!("  1. Log into ConvertKit");
    println!("  2. Go to Subscribers -> Import Subscribers");
    println!("  3. Upload: {file_name}");
    println!("  4. Map columns (should auto-detect)");
    println!("  5. Choose to update existing subscribers if desired");
    println!("  6. Review and confirm import");
}

fn column_table(headers: &[String], listing: ColumnListing) -> Table {
    let shown = match listing {
        ColumnListing::Full => headers.len(),
        ColumnListing::Preview => headers.len().min(COLUMN_PREVIEW),
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, header) in headers.iter().take(shown).enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(header)]);
    }
    table
}

fn stat_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn add_stat(table: &mut Table, label: &str, value: usize, highlight: Option<Color>) {
    let count = match highlight {
        Some(color) => count_cell(value, color),
        None => Cell::new(value),
    };
    table.add_row(vec![Cell::new(label), count]);
}

fn add_detail(table: &mut Table, label: &str, value: usize) {
    table.add_row(vec![dim_cell(format!("  {label}")), dim_cell(value)]);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
