//! Core types for converting MailChimp subscriber exports to ConvertKit imports.
//!
//! This crate holds the data model shared by the ingest, transform, output and
//! CLI crates. It has no I/O of its own.
//!
//! # Overview
//!
//! - **Records**: [`Record`] and [`SourceTable`] hold the parsed input rows
//! - **Columns**: [`ColumnMapping`] resolves source columns once per pass
//! - **Contacts**: [`NormalizedContact`] is a cleaned, accepted row
//! - **Statistics**: [`RunStatistics`] and [`AnalysisReport`] carry pass counters
//! - **Options**: [`ConvertOptions`] configures a run

mod analysis;
mod columns;
mod contact;
mod options;
mod record;
mod stats;

pub use analysis::{AnalysisReport, TagCount};
pub use columns::{
    ColumnMapping, DEST_EMAIL, DEST_FIRST_NAME, DEST_LAST_NAME, DEST_TAGS, OUTPUT_HEADERS,
    SOURCE_EMAIL, SOURCE_FIRST_NAME, SOURCE_LAST_NAME, SOURCE_TAGS,
};
pub use contact::NormalizedContact;
pub use options::{
    ColumnListing, ConvertOptions, DuplicatePolicy, OUTPUT_SUFFIX, default_output_path,
};
pub use record::{Record, SourceTable};
pub use stats::{RunStatistics, SkipReason};
