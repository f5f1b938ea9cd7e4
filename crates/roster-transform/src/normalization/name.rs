/// Collapse whitespace runs to single spaces and trim the ends.
///
/// Case, punctuation and non-ASCII characters are kept as-is.
pub fn clean_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
