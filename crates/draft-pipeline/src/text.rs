//! Small text helpers shared by the stages.

/// Truncate a string to at most `max` characters.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
