//! Inspection report data structures.
//!
//! An [`InspectionReport`] is created per file, filled during inspection,
//! refined by the frequency analyzer, and then treated as immutable output.
//!
//! # Examples
//!
//! ```
//! use lexiscan::inspect::report::{InspectionReport, Issue};
//!
//! let mut report = InspectionReport::new("notes.txt");
//! report.increment_word_count();
//! report.add_issue(Issue::new(3, "zyxlor"));
//!
//! assert_eq!(report.issue_count(), 1);
//! assert_eq!(report.heading(), "notes.txt (1 issue):");
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One occurrence of a canonical word not found in the dictionary and not
/// classified as numeric. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The 1-based line of the file on which the word was found.
    pub line: usize,

    /// The canonical (normalized) word text.
    pub text: String,
}

impl Issue {
    /// Create a new issue.
    pub fn new<S: Into<String>>(line: usize, text: S) -> Self {
        Issue {
            line,
            text: text.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The result of inspecting one file.
///
/// `word_count` counts every comparable token seen, including known and
/// numeric ones; it only increases, even when issues are later removed by
/// the frequency analyzer. Issues are kept in order of occurrence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InspectionReport {
    /// The name of the inspected file.
    pub filename: String,

    /// Count of all comparable tokens seen in the file.
    pub word_count: usize,

    /// Explanatory warnings emitted by the frequency analyzer.
    pub warnings: Vec<String>,

    /// Unresolved unknown-word occurrences, in order of occurrence.
    pub issues: Vec<Issue>,
}

impl InspectionReport {
    /// Create a new empty report for the given file.
    pub fn new<S: Into<String>>(filename: S) -> Self {
        InspectionReport {
            filename: filename.into(),
            word_count: 0,
            warnings: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Record one more comparable token.
    pub fn increment_word_count(&mut self) {
        self.word_count += 1;
    }

    /// Append an issue, preserving order of occurrence.
    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Append a warning.
    pub fn add_warning<S: Into<String>>(&mut self, warning: S) {
        self.warnings.push(warning.into());
    }

    /// Get the number of unresolved issues.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Remove every issue whose text is in the given set, preserving the
    /// relative order of the remaining issues.
    pub fn remove_issues_with_text(&mut self, texts: &HashSet<String>) {
        self.issues.retain(|issue| !texts.contains(&issue.text));
    }

    /// The heading line identifying the filename and issue count.
    pub fn heading(&self) -> String {
        let issue_count = self.issue_count();
        if issue_count == 1 {
            format!("{} (1 issue):", self.filename)
        } else {
            format!("{} ({} issues):", self.filename, issue_count)
        }
    }
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading())?;
        for warning in &self.warnings {
            write!(f, "\n{warning}")?;
        }
        for issue in &self.issues {
            write!(f, "\n{:6}: {}", issue.line, issue.text)?;
        }
        Ok(())
    }
}
