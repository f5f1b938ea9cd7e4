//! Counters collected by a conversion pass.

use std::fmt;

/// Why a row was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Email cell was empty or the column was absent.
    MissingEmail,
    /// Email failed syntactic validation.
    InvalidEmail,
    /// Email was already accepted earlier in the pass.
    DuplicateEmail,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::MissingEmail => "missing email",
            SkipReason::InvalidEmail => "invalid email",
            SkipReason::DuplicateEmail => "duplicate email",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run counters. Only the pass that owns them mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_rows: usize,
    pub processed: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub invalid_emails: usize,
    pub missing_emails: usize,
    /// Rows whose tags were non-empty after cleaning.
    pub tags_cleaned: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a skipped row under `skipped` and its reason-specific counter.
    pub fn record_skip(&mut self, reason: SkipReason) {
        self.skipped += 1;
        match reason {
            SkipReason::MissingEmail => self.missing_emails += 1,
            SkipReason::InvalidEmail => self.invalid_emails += 1,
            SkipReason::DuplicateEmail => self.duplicates += 1,
        }
    }

    /// Rows whose email passed validation, duplicates included.
    pub fn valid_emails(&self) -> usize {
        self.total_rows.saturating_sub(self.invalid_emails + self.missing_emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_skip_counts_reason() {
        let mut stats = RunStatistics::new();
        stats.total_rows = 4;
        stats.record_skip(SkipReason::InvalidEmail);
        stats.record_skip(SkipReason::MissingEmail);
        stats.record_skip(SkipReason::DuplicateEmail);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.invalid_emails, 1);
        assert_eq!(stats.missing_emails, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.valid_emails(), 2);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::DuplicateEmail.to_string(), "duplicate email");
    }
}
