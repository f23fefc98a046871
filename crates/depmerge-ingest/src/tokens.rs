//! Comma-separated attribute tokenizing.

/// Split a comma-separated attribute into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept. Empty input yields no tokens.
pub fn split_field(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
