/// A validated, cleaned subscriber ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedContact {
    /// Trimmed email in its original case.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Cleaned tags in source order. Repeats are kept.
    pub tags: Vec<String>,
}

impl NormalizedContact {
    /// Lowercased email used for duplicate detection.
    pub fn email_key(&self) -> String {
        self.email.to_lowercase()
    }

    /// Tags in ConvertKit's multi-tag cell format.
    pub fn tags_cell(&self) -> String {
        self.tags.join(", ")
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
