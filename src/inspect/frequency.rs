//! Frequency-based issue analysis.
//!
//! Files with recurring unique tokens (proper nouns, identifiers, jargon)
//! would otherwise dominate the issue list with repeated false positives.
//! This analyzer reclassifies unknown words that recur often enough as
//! accepted names, removing their issues and emitting one explanatory
//! warning per promoted word.
//!
//! The threshold scales with document length: a fixed absolute floor of 10
//! occurrences, growing at one word in ten thousand for very large
//! documents.
//!
//! # Examples
//!
//! ```
//! use lexiscan::inspect::frequency::FrequencyAnalyzer;
//! use lexiscan::inspect::report::{InspectionReport, Issue};
//!
//! let mut report = InspectionReport::new("saga.txt");
//! for _ in 0..50 {
//!     report.increment_word_count();
//! }
//! for line in 1..=15 {
//!     report.add_issue(Issue::new(line, "zyxlor"));
//! }
//!
//! FrequencyAnalyzer::new().analyze(&mut report);
//!
//! assert_eq!(report.issue_count(), 0);
//! assert_eq!(
//!     report.warnings,
//!     vec!["considering 'zyxlor' a name as it was detected 15 times"]
//! );
//! ```

use std::collections::HashSet;

use ahash::AHashMap;
use log::debug;

use crate::inspect::report::InspectionReport;

/// Analyzer that promotes high-frequency unknown words to accepted names.
///
/// A word qualifies when its occurrence count is strictly greater than
/// `max(word_count / 10000, 10)`. Warnings are emitted in descending order
/// of count, ties broken by text, so the output is deterministic for a
/// given input. Running the analyzer again on an already-analyzed report
/// changes nothing: the surviving issues' counts cannot exceed the
/// threshold.
#[derive(Clone, Debug, Default)]
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    /// Create a new frequency analyzer.
    pub fn new() -> Self {
        FrequencyAnalyzer
    }

    /// The minimum occurrence count (exclusive) above which a recurring
    /// unknown word is presumed to be a name.
    pub fn name_threshold(&self, word_count: usize) -> f64 {
        (word_count as f64 / 10000.0).max(10.0)
    }

    /// Analyze a report's issues, possibly generating warnings and removing
    /// issues.
    pub fn analyze(&self, report: &mut InspectionReport) {
        let mut typo_counter: AHashMap<&str, usize> = AHashMap::new();
        for issue in &report.issues {
            *typo_counter.entry(issue.text.as_str()).or_insert(0) += 1;
        }

        let threshold = self.name_threshold(report.word_count);
        let mut promoted: Vec<(usize, String)> = typo_counter
            .into_iter()
            .filter(|&(_, count)| count as f64 > threshold)
            .map(|(text, count)| (count, text.to_string()))
            .collect();

        // Count descending, then text ascending, for reproducible output.
        promoted.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        if promoted.is_empty() {
            return;
        }
        debug!(
            "{}: promoting {} recurring words to names (threshold {})",
            report.filename,
            promoted.len(),
            threshold
        );

        for (count, text) in &promoted {
            report.add_warning(format!(
                "considering '{text}' a name as it was detected {count} times"
            ));
        }

        let texts: HashSet<String> = promoted.into_iter().map(|(_, text)| text).collect();
        report.remove_issues_with_text(&texts);
    }
}
