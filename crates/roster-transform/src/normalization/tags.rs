//! Tag list cleaning.
//!
//! MailChimp exports tags as a single cell with inconsistent separators and
//! quoting, e.g. `"VIP", 'New';Spring Sale`. ConvertKit expects the tags
//! joined by `", "`. Quotes in the source cell are export noise and are never
//! part of a tag.

/// Quote characters removed anywhere in a tag cell.
///
/// Straight double and single quotes plus the left/right curly variants of each.
pub const STRIPPED_QUOTES: [char; 6] = [
    '"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Each occurrence separates two tags.
pub const TAG_SEPARATORS: [char; 3] = [',', ';', '|'];

/// Clean a raw tag cell into its individual tags, in source order.
///
/// Repeated tags are kept. Segments that are empty after whitespace collapsing
/// are dropped.
pub fn clean_tag_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let unquoted: String = trimmed
        .chars()
        .filter(|c| !STRIPPED_QUOTES.contains(c))
        .collect();
    unquoted
        .split(&TAG_SEPARATORS[..])
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Clean a raw tag cell into ConvertKit's `", "`-joined format.
pub fn clean_tags(raw: &str) -> String {
    clean_tag_list(raw).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators_and_quotes() {
        assert_eq!(clean_tags("VIP;'New'"), "VIP, New");
        assert_eq!(clean_tags("\"A\" | B ;C,D"), "A, B, C, D");
    }

    #[test]
    fn test_curly_quotes() {
        assert_eq!(
            clean_tags("\u{201C}Spring Sale\u{201D}, \u{2018}VIP\u{2019}"),
            "Spring Sale, VIP"
        );
    }

    #[test]
    fn test_quotes_removed_inside_words() {
        assert_eq!(clean_tags("Don't Email"), "Dont Email");
    }

    #[test]
    fn test_internal_whitespace_collapsed() {
        assert_eq!(clean_tags("  Spring\t\n  Sale  ,  2024 "), "Spring Sale, 2024");
    }

    #[test]
    fn test_adjacent_separators_dropped() {
        assert_eq!(clean_tags("a,,;|b"), "a, b");
    }

    #[test]
    fn test_no_semantic_dedupe() {
        assert_eq!(clean_tags("VIP, VIP"), "VIP, VIP");
        assert_eq!(clean_tag_list("VIP|VIP"), vec!["VIP", "VIP"]);
    }

    #[test]
    fn test_only_noise_is_empty() {
        assert_eq!(clean_tags(",;|''"), "");
        assert_eq!(clean_tags("\"  \u{201C}\u{201D} '"), "");
        assert!(clean_tag_list("").is_empty());
    }

    #[test]
    fn test_already_clean_is_unchanged() {
        assert_eq!(clean_tags("VIP, New"), "VIP, New");
    }
}
