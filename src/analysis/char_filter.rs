//! Typographic character filter implementation.
//!
//! This module provides a filter that rewrites typographic variants into
//! their plain ASCII equivalents before tokenization, so that normalization
//! and dictionary lookup are not defeated by em/en-dash-style double hyphens
//! or curly quotation marks.
//!
//! # Examples
//!
//! ```
//! use lexiscan::analysis::char_filter::TypographicCharFilter;
//!
//! let filter = TypographicCharFilter::new();
//! assert_eq!(filter.filter("rock--paper"), "rock paper");
//! assert_eq!(filter.filter("\u{2018}quoted\u{2019}"), "'quoted'");
//! ```

/// A filter that normalizes typographic characters in a line of text.
///
/// Two rewrites are applied:
///
/// - the double-hyphen sequence `--` becomes a single space, splitting
///   dash-joined words into separate tokens
/// - curly single and double quotation marks become their straight ASCII
///   equivalents, so possessive stripping and quote trimming see `'` and `"`
#[derive(Clone, Debug, Default)]
pub struct TypographicCharFilter;

impl TypographicCharFilter {
    /// Create a new typographic character filter.
    pub fn new() -> Self {
        TypographicCharFilter
    }

    /// Apply the filter to a single line of input.
    pub fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '-' if chars.peek() == Some(&'-') => {
                    // Consume the run of hyphens and emit one space.
                    while chars.peek() == Some(&'-') {
                        chars.next();
                    }
                    output.push(' ');
                }
                '\u{2018}' | '\u{2019}' => output.push('\''),
                '\u{201C}' | '\u{201D}' => output.push('"'),
                _ => output.push(c),
            }
        }

        output
    }

    /// Get the name of this filter (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "typographic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_hyphen_becomes_space() {
        let filter = TypographicCharFilter::new();
        assert_eq!(filter.filter("yes--no"), "yes no");
        assert_eq!(filter.filter("a--b--c"), "a b c");
    }

    #[test]
    fn test_longer_hyphen_runs_collapse() {
        let filter = TypographicCharFilter::new();
        assert_eq!(filter.filter("wait---what"), "wait what");
    }

    #[test]
    fn test_single_hyphen_preserved() {
        let filter = TypographicCharFilter::new();
        assert_eq!(filter.filter("bi-tap"), "bi-tap");
    }

    #[test]
    fn test_curly_quotes_straightened() {
        let filter = TypographicCharFilter::new();
        assert_eq!(filter.filter("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(filter.filter("\u{201C}hi\u{201D}"), "\"hi\"");
        assert_eq!(filter.filter("it\u{2019}s"), "it's");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let filter = TypographicCharFilter::new();
        assert_eq!(filter.filter("plain old text"), "plain old text");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(TypographicCharFilter::new().name(), "typographic");
    }
}
