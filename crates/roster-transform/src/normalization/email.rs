//! Email address validation.
//!
//! This is a syntactic filter only: no DNS or mailbox checks. Addresses that
//! are legal per RFC 5322 but unusual (quoted local parts, IP literals) are
//! rejected.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with a TLD of at least two ASCII letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

/// Outcome of checking a raw email cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus<'a> {
    /// Empty after trimming.
    Missing,
    /// Non-empty but not a plausible address.
    Invalid,
    /// Trimmed address, original case.
    Valid(&'a str),
}

impl EmailStatus<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, EmailStatus::Valid(_))
    }
}

/// Check whether `email` looks like an address after trimming surrounding whitespace.
pub fn is_valid_email(email: &str) -> bool {
    classify_email(email).is_valid()
}

/// Classify a raw email cell.
pub fn classify_email(raw: &str) -> EmailStatus<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        EmailStatus::Missing
    } else if EMAIL_REGEX.is_match(trimmed) {
        EmailStatus::Valid(trimmed)
    } else {
        EmailStatus::Invalid
    }
}
