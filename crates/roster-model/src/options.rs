//! Configuration options for a conversion run.

use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem for the default output path.
pub const OUTPUT_SUFFIX: &str = "_convertkit_ready";

/// What to do with an email that was already accepted in the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Skip every occurrence after the first.
    #[default]
    Remove,
    /// Write every occurrence.
    Keep,
}

/// How many input headers the analysis summary lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnListing {
    /// First five headers, then a count of the rest.
    #[default]
    Preview,
    /// Every header.
    Full,
}

/// Options controlling a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub output_path: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
    pub column_listing: ColumnListing,
}

impl ConvertOptions {
    /// Options writing next to `input` with the default output name.
    pub fn for_input(input: &Path) -> Self {
        Self {
            output_path: default_output_path(input),
            duplicate_policy: DuplicatePolicy::default(),
            column_listing: ColumnListing::default(),
        }
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    #[must_use]
    pub fn with_column_listing(mut self, listing: ColumnListing) -> Self {
        self.column_listing = listing;
        self
    }

    pub fn removes_duplicates(&self) -> bool {
        self.duplicate_policy == DuplicatePolicy::Remove
    }
}

/// `<input dir>/<input stem>_convertkit_ready.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.csv");
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
