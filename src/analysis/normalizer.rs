//! Word normalizer implementation.
//!
//! This module maps a raw token to the canonical form used for dictionary
//! lookups: surrounding punctuation is stripped, the remainder is lowercased,
//! and a trailing possessive `'s` is dropped. Tokens that normalize to the
//! empty string (pure punctuation, empty input) are signalled with `None` and
//! excluded from word counting and dictionary checks.
//!
//! # Examples
//!
//! ```
//! use lexiscan::analysis::normalizer::WordNormalizer;
//!
//! let normalizer = WordNormalizer::new();
//! assert_eq!(normalizer.normalize("(Hello!)"), Some("hello".to_string()));
//! assert_eq!(normalizer.normalize("Ada's"), Some("ada".to_string()));
//! assert_eq!(normalizer.normalize("?!*"), None);
//! ```

/// The punctuation characters stripped from both ends of a token.
///
/// Stripping periods this way is lossy for abbreviations ("U.S." becomes
/// "u.s"), which is accepted behavior.
const STRIP_CHARS: &[char] = &[
    '*', '_', ',', ':', ';', '.', '!', '?', '(', ')', '{', '}', '[', ']', '\'', '"',
];

/// A normalizer that produces canonical comparison forms for raw tokens.
///
/// Normalization never fails; any input string is accepted. A `None` result
/// means the token is not a comparable word.
#[derive(Clone, Debug, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Create a new word normalizer.
    pub fn new() -> Self {
        WordNormalizer
    }

    /// Normalize a raw token into its canonical word form.
    ///
    /// Returns `None` when nothing remains after stripping punctuation.
    pub fn normalize(&self, word: &str) -> Option<String> {
        let stripped = word.trim_matches(|c| STRIP_CHARS.contains(&c));
        if stripped.is_empty() {
            return None;
        }

        let lowered = stripped.to_lowercase();
        match lowered.strip_suffix("'s") {
            Some(base) => Some(base.to_string()),
            None => Some(lowered),
        }
    }

    /// Get the name of this normalizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(word: &str) -> Option<String> {
        WordNormalizer::new().normalize(word)
    }

    #[test]
    fn test_strips_surrounding_punctuation() {
        assert_eq!(normalize("(hello)"), Some("hello".to_string()));
        assert_eq!(normalize("*bold*"), Some("bold".to_string()));
        assert_eq!(normalize("\"quoted,\""), Some("quoted".to_string()));
        assert_eq!(normalize("[end]."), Some("end".to_string()));
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Hello"), Some("hello".to_string()));
        assert_eq!(normalize("SHOUT!"), Some("shout".to_string()));
    }

    #[test]
    fn test_drops_possessive_suffix() {
        assert_eq!(normalize("Ada's"), Some("ada".to_string()));
        assert_eq!(normalize("DOG'S"), Some("dog".to_string()));
    }

    #[test]
    fn test_inner_punctuation_kept() {
        assert_eq!(normalize("bi-tap"), Some("bi-tap".to_string()));
        assert_eq!(normalize("U.S."), Some("u.s".to_string()));
    }

    #[test]
    fn test_pure_punctuation_is_not_a_word() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("..."), None);
        assert_eq!(normalize("?!"), None);
        assert_eq!(normalize("()"), None);
    }

    #[test]
    fn test_normalizer_name() {
        assert_eq!(WordNormalizer::new().name(), "word");
    }
}
