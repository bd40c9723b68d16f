//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing `key = value` configuration files
//! with comment skipping and inline comment removal.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is lowercased with `.`, `-` and spaces folded to `_`
/// - Value has any inline comment removed and is trimmed
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove a trailing ` # comment` from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Trimmed value without the comment
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments
///   and `https://` values survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .find(|&(i, c)| c == '#' && i > 0 && s[..i].ends_with(char::is_whitespace))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped
    ///
    /// - Input: Various comment prefixes and a real entry
    /// - Output: Only the entry is kept
    fn skips_comments() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("sort_mode = newest"));
    }

    #[test]
    /// What: Keys are normalized and inline comments stripped without breaking URLs
    ///
    /// - Input: Dashed key with a URL value and a trailing comment
    /// - Output: Normalized key; URL intact
    fn parses_key_values() {
        assert_eq!(
            parse_key_value("Catalog-Source = https://shop.test/p.json#v2  # remote feed"),
            Some((
                "catalog_source".to_string(),
                "https://shop.test/p.json#v2".to_string()
            ))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }
}
