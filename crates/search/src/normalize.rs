//! Text normalization applied before any comparison.

use once_cell::sync::Lazy;
use regex::Regex;

/// Parenthesized qualifier such as `(planet)` or `(astronaut)`.
///
/// Non-greedy, so `"A (b) (c)"` loses both groups independently. A span
/// never crosses a line terminator (`\n`, `\r`, U+2028, U+2029).
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^\n\r\x{2028}\x{2029}]*?\)").unwrap());

/// Normalize text for relevance comparison.
///
/// Strips every parenthesized span, trims surrounding whitespace and
/// lower-cases the result.
///
/// # Example
/// ```
/// use astrorank_search::normalize;
///
/// assert_eq!(normalize("  Mars (planet) "), "mars");
/// ```
pub fn normalize(text: &str) -> String {
    PARENTHETICAL.replace_all(text, "").trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_qualifier() {
        assert_eq!(normalize("Mars (planet)"), "mars");
    }

    #[test]
    fn test_strips_each_group() {
        assert_eq!(normalize("A (b) middle (c)"), "a  middle");
    }

    #[test]
    fn test_non_greedy_nested() {
        // The first closing paren ends the span.
        assert_eq!(normalize("Apollo (11 (crew) mission)"), "apollo  mission)");
    }

    #[test]
    fn test_unbalanced_parens_kept() {
        assert_eq!(normalize("Sagittarius A*("), "sagittarius a*(");
    }

    #[test]
    fn test_line_terminator_inside_parens_not_stripped() {
        assert_eq!(normalize("Io (moon\nof Jupiter)"), "io (moon\nof jupiter)");
        assert_eq!(normalize("Io (moon\rof Jupiter)"), "io (moon\rof jupiter)");
        assert_eq!(normalize("Io (moon\u{2028}of Jupiter)"), "io (moon\u{2028}of jupiter)");
        assert_eq!(normalize("Io (moon\u{2029}of Jupiter)"), "io (moon\u{2029}of jupiter)");
    }

    #[test]
    fn test_span_after_line_terminator_still_stripped() {
        assert_eq!(normalize("Io\r(moon)"), "io");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
        assert_eq!(normalize("(only a qualifier)"), "");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(normalize("ÉTOILE Polaire"), "étoile polaire");
    }
}
