//! Line-tracking whitespace tokenizer implementation.
//!
//! This module turns a readable text source into a lazy, finite, single-pass
//! sequence of [`LineToken`] values. Line numbers are 1-based and increment
//! once per line of input regardless of how many tokens the line yields.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use lexiscan::analysis::tokenizer::LineTokenizer;
//!
//! let tokenizer = LineTokenizer::new();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize(Cursor::new("hello world\n\nbye"))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!((tokens[0].line, tokens[0].text.as_str()), (1, "hello"));
//! assert_eq!((tokens[2].line, tokens[2].text.as_str()), (3, "bye"));
//! ```

use std::io::{BufRead, Lines};

use crate::analysis::char_filter::TypographicCharFilter;
use crate::error::Result;

/// A raw token paired with the 1-based line number it was found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineToken {
    /// The 1-based line number of the source line that produced this token.
    pub line: usize,

    /// The raw token text, as split from the typographically filtered line.
    pub text: String,
}

impl LineToken {
    /// Create a new line token.
    pub fn new<S: Into<String>>(line: usize, text: S) -> Self {
        LineToken {
            line,
            text: text.into(),
        }
    }
}

/// A tokenizer that splits each line of a text source on whitespace runs.
///
/// Every line is passed through the [`TypographicCharFilter`] before
/// splitting. The produced stream is forward-only and consumed exactly once,
/// matching the single-pass nature of streaming file reads.
#[derive(Clone, Debug, Default)]
pub struct LineTokenizer {
    char_filter: TypographicCharFilter,
}

impl LineTokenizer {
    /// Create a new line tokenizer.
    pub fn new() -> Self {
        LineTokenizer {
            char_filter: TypographicCharFilter::new(),
        }
    }

    /// Tokenize the given source into a stream of line tokens.
    ///
    /// Read errors from the underlying source surface as `Err` items in the
    /// stream; the stream ends after the first error.
    pub fn tokenize<R: BufRead>(&self, reader: R) -> LineTokenStream<R> {
        LineTokenStream {
            lines: reader.lines(),
            char_filter: self.char_filter.clone(),
            line_number: 0,
            pending: Vec::new().into_iter(),
            failed: false,
        }
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "line"
    }
}

/// A lazy, single-pass stream of [`LineToken`] values over a text source.
pub struct LineTokenStream<R: BufRead> {
    lines: Lines<R>,
    char_filter: TypographicCharFilter,
    line_number: usize,
    pending: std::vec::IntoIter<LineToken>,
    failed: bool,
}

impl<R: BufRead> Iterator for LineTokenStream<R> {
    type Item = Result<LineToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            match self.lines.next()? {
                Ok(line) => {
                    self.line_number += 1;
                    let filtered = self.char_filter.filter(&line);
                    let line_number = self.line_number;
                    let tokens: Vec<LineToken> = filtered
                        .split_whitespace()
                        .map(|word| LineToken::new(line_number, word))
                        .collect();
                    self.pending = tokens.into_iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn collect(input: &str) -> Vec<LineToken> {
        LineTokenizer::new()
            .tokenize(Cursor::new(input.to_string()))
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_tokens_carry_line_numbers() {
        let tokens = collect("one two\nthree\nfour five six");
        let pairs: Vec<(usize, &str)> =
            tokens.iter().map(|t| (t.line, t.text.as_str())).collect();

        assert_eq!(
            pairs,
            vec![
                (1, "one"),
                (1, "two"),
                (2, "three"),
                (3, "four"),
                (3, "five"),
                (3, "six"),
            ]
        );
    }

    #[test]
    fn test_empty_lines_advance_line_numbers() {
        let tokens = collect("first\n\n\nlast");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 4);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokens = collect("a  b\tc");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_char_filter_applied_per_line() {
        let tokens = collect("rock--paper");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "rock");
        assert_eq!(tokens[1].text, "paper");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(LineTokenizer::new().name(), "line");
    }
}
