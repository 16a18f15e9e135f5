//! File inspector implementation.
//!
//! The inspector combines the tokenizer, normalizer, numeric classifier, and
//! dictionary to classify every token of a text source and produce an
//! [`InspectionReport`].
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use lexiscan::dictionary::Dictionary;
//! use lexiscan::inspect::inspector::Inspector;
//!
//! let dictionary = Dictionary::from_words(["hello", "world"]);
//! let inspector = Inspector::new(&dictionary);
//!
//! let report = inspector
//!     .inspect("greeting.txt", Cursor::new("Hello, wrold!"))
//!     .unwrap();
//!
//! assert_eq!(report.word_count, 2);
//! assert_eq!(report.issue_count(), 1);
//! assert_eq!(report.issues[0].text, "wrold");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::analysis::normalizer::WordNormalizer;
use crate::analysis::numeric::is_number;
use crate::analysis::tokenizer::LineTokenizer;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::inspect::frequency::FrequencyAnalyzer;
use crate::inspect::report::{InspectionReport, Issue};

/// Inspector that classifies every token of a text source.
///
/// Per token: normalize; skip tokens that are not comparable words; count
/// the rest; numeric literals and dictionary hits produce no issue; anything
/// else is appended as an issue in order of occurrence. The frequency
/// analyzer refines the report before it is returned.
///
/// The inspector borrows its dictionary, so one dictionary can serve any
/// number of inspectors and inspections.
#[derive(Debug)]
pub struct Inspector<'a> {
    dictionary: &'a Dictionary,
    tokenizer: LineTokenizer,
    normalizer: WordNormalizer,
    analyzer: FrequencyAnalyzer,
}

impl<'a> Inspector<'a> {
    /// Create a new inspector over the given dictionary.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Inspector {
            dictionary,
            tokenizer: LineTokenizer::new(),
            normalizer: WordNormalizer::new(),
            analyzer: FrequencyAnalyzer::new(),
        }
    }

    /// Inspect a text source, producing a frequency-refined report.
    pub fn inspect<R: BufRead>(&self, filename: &str, reader: R) -> Result<InspectionReport> {
        let mut report = self.inspect_raw(filename, reader)?;
        self.analyzer.analyze(&mut report);
        Ok(report)
    }

    /// Inspect a text source without the frequency-analysis pass.
    ///
    /// The raw report keeps every unknown-word occurrence as an issue.
    pub fn inspect_raw<R: BufRead>(&self, filename: &str, reader: R) -> Result<InspectionReport> {
        let mut report = InspectionReport::new(filename);

        for token in self.tokenizer.tokenize(reader) {
            let token = token?;
            self.inspect_word(token.line, &token.text, &mut report);
        }

        debug!(
            "{}: {} words, {} raw issues",
            report.filename,
            report.word_count,
            report.issue_count()
        );
        Ok(report)
    }

    /// Inspect a text file on disk, producing a frequency-refined report.
    pub fn inspect_file<P: AsRef<Path>>(&self, path: P) -> Result<InspectionReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.inspect(&path.display().to_string(), BufReader::new(file))
    }

    /// Inspect a single raw token from a text source.
    fn inspect_word(&self, line: usize, word: &str, report: &mut InspectionReport) {
        let Some(word) = self.normalizer.normalize(word) else {
            return;
        };

        report.increment_word_count();
        if !is_number(&word) && !self.dictionary.contains(&word) {
            report.add_issue(Issue::new(line, word));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn inspect(dictionary: &Dictionary, text: &str) -> InspectionReport {
        Inspector::new(dictionary)
            .inspect("test.txt", Cursor::new(text.to_string()))
            .unwrap()
    }

    #[test]
    fn test_dictionary_word_yields_no_issue() {
        let dictionary = Dictionary::from_words(["home"]);
        let report = inspect(&dictionary, "home");

        assert_eq!(report.word_count, 1);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_unknown_word_yields_one_issue_with_normalized_text() {
        let dictionary = Dictionary::from_words(["home"]);
        let report = inspect(&dictionary, "(Zyxlor!)");

        assert_eq!(report.word_count, 1);
        assert_eq!(report.issue_count(), 1);
        assert_eq!(report.issues[0].line, 1);
        assert_eq!(report.issues[0].text, "zyxlor");
    }

    #[test]
    fn test_numeric_tokens_counted_but_not_issues() {
        let dictionary = Dictionary::from_words(["total"]);
        let report = inspect(&dictionary, "Total: $9,000.00 -2 4.0");

        assert_eq!(report.word_count, 4);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_pure_punctuation_not_counted() {
        let dictionary = Dictionary::from_words(["word"]);
        let report = inspect(&dictionary, "word ... ?! word");

        assert_eq!(report.word_count, 2);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_issues_record_line_numbers_in_order() {
        let dictionary = Dictionary::from_words(["fine"]);
        let report = inspect(&dictionary, "fine qwpf\n\nzzst fine");

        assert_eq!(report.issue_count(), 2);
        assert_eq!((report.issues[0].line, report.issues[0].text.as_str()), (1, "qwpf"));
        assert_eq!((report.issues[1].line, report.issues[1].text.as_str()), (3, "zzst"));
    }

    #[test]
    fn test_possessive_resolved_against_dictionary() {
        let dictionary = Dictionary::from_words(["sphinx"]);
        let report = inspect(&dictionary, "The Sphinx's riddle");

        // "the" and "riddle" are unknown to this tiny dictionary.
        assert_eq!(report.word_count, 3);
        let texts: Vec<&str> = report.issues.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "riddle"]);
    }

    #[test]
    fn test_inspect_applies_frequency_analysis() {
        let dictionary = Dictionary::from_words(["filler"]);
        let mut text = String::new();
        for _ in 0..15 {
            text.push_str("Zyxlor ");
        }
        for _ in 0..35 {
            text.push_str("filler ");
        }

        let report = inspect(&dictionary, &text);

        assert_eq!(report.word_count, 50);
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("zyxlor"));
        assert!(report.warnings[0].contains("15"));
    }

    #[test]
    fn test_inspect_raw_skips_frequency_analysis() {
        let dictionary = Dictionary::default();
        let text = "qwpf ".repeat(20);

        let report = Inspector::new(&dictionary)
            .inspect_raw("test.txt", Cursor::new(text))
            .unwrap();

        assert_eq!(report.issue_count(), 20);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_file_surfaces_error() {
        let dictionary = Dictionary::from_words(["any"]);
        let inspector = Inspector::new(&dictionary);

        assert!(inspector.inspect_file("/nonexistent/file.txt").is_err());
    }
}
