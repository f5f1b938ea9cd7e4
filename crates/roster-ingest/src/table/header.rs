//! CSV header normalization.

use csv::StringRecord;

/// Normalizes a header value by trimming whitespace and any byte order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

/// Normalized column names for a header record, in file order.
pub fn header_names(record: &StringRecord) -> Vec<String> {
    record.iter().map(normalize_header).collect()
}
