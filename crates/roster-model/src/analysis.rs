//! Result of the read-only analysis pass.

/// A cleaned tag and the number of contacts carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Statistics gathered by scanning an export without writing output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub headers: Vec<String>,
    pub total_rows: usize,
    pub valid_emails: usize,
    /// Non-empty emails that failed validation.
    pub invalid_emails: usize,
    pub missing_emails: usize,
    /// Distinct lowercased valid emails.
    pub unique_emails: usize,
    /// Distinct lowercased emails seen more than once.
    pub duplicate_emails: usize,
    pub unique_tags: usize,
    /// Most frequent tags, highest count first.
    pub top_tags: Vec<TagCount>,
}

impl AnalysisReport {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of distinct tags not listed in `top_tags`.
    pub fn remaining_tags(&self) -> usize {
        self.unique_tags.saturating_sub(self.top_tags.len())
    }
}
