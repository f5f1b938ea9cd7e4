//! Source-to-destination column resolution.
//!
//! ConvertKit expects four fixed columns. MailChimp exports name them
//! differently, and some exports use the ConvertKit names already. The
//! destination name wins when both are present.

/// ConvertKit email column.
pub const DEST_EMAIL: &str = "Email";
/// ConvertKit first name column.
pub const DEST_FIRST_NAME: &str = "First Name";
/// ConvertKit last name column.
pub const DEST_LAST_NAME: &str = "Last Name";
/// ConvertKit tags column.
pub const DEST_TAGS: &str = "Tags";

/// MailChimp email column.
pub const SOURCE_EMAIL: &str = "Email Address";
/// MailChimp first name column.
pub const SOURCE_FIRST_NAME: &str = "First Name";
/// MailChimp last name column.
pub const SOURCE_LAST_NAME: &str = "Last Name";
/// MailChimp tags column.
pub const SOURCE_TAGS: &str = "TAGS";

/// Output header, in output order.
pub const OUTPUT_HEADERS: [&str; 4] = [DEST_EMAIL, DEST_FIRST_NAME, DEST_LAST_NAME, DEST_TAGS];

/// Source column names to read for each destination field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub tags: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            email: SOURCE_EMAIL.to_string(),
            first_name: SOURCE_FIRST_NAME.to_string(),
            last_name: SOURCE_LAST_NAME.to_string(),
            tags: SOURCE_TAGS.to_string(),
        }
    }
}

impl ColumnMapping {
    /// Resolve the mapping against a header row.
    ///
    /// Columns that are absent from `headers` still resolve to their MailChimp
    /// default; reading them yields empty values.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let present = |name: &str| headers.iter().any(|header| header.as_ref() == name);
        let mut mapping = Self::default();
        if present(DEST_EMAIL) {
            mapping.email = DEST_EMAIL.to_string();
        }
        if present(DEST_TAGS) {
            mapping.tags = DEST_TAGS.to_string();
        }
        mapping
    }
}
