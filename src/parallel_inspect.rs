//! Parallel inspection of many files over one shared dictionary.
//!
//! The dictionary is immutable after construction, so it can be borrowed by
//! any number of rayon workers at once. Each file's report is owned
//! exclusively by the inspection that produced it; results come back in the
//! same order as the input paths.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::PathBuf;
//! use lexiscan::dictionary::Dictionary;
//! use lexiscan::parallel_inspect::inspect_files;
//!
//! let dictionary = Dictionary::from_words(["hello", "world"]);
//! let paths = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
//!
//! for result in inspect_files(&dictionary, &paths) {
//!     match result {
//!         Ok(report) => println!("{report}"),
//!         Err(e) => eprintln!("Error: {e}"),
//!     }
//! }
//! ```

use std::path::PathBuf;

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::inspect::inspector::Inspector;
use crate::inspect::report::InspectionReport;

/// Inspect many files in parallel, sharing one read-only dictionary.
///
/// A file that cannot be read yields an `Err` in its slot without affecting
/// the other files.
pub fn inspect_files(dictionary: &Dictionary, paths: &[PathBuf]) -> Vec<Result<InspectionReport>> {
    paths
        .par_iter()
        .map(|path| Inspector::new(dictionary).inspect_file(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_results_keep_input_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "home qwpf").unwrap();
        fs::write(&second, "home home").unwrap();

        let dictionary = Dictionary::from_words(["home"]);
        let results = inspect_files(&dictionary, &[first.clone(), second.clone()]);

        assert_eq!(results.len(), 2);
        let first_report = results[0].as_ref().unwrap();
        let second_report = results[1].as_ref().unwrap();
        assert_eq!(first_report.filename, first.display().to_string());
        assert_eq!(first_report.issue_count(), 1);
        assert_eq!(second_report.issue_count(), 0);
    }

    #[test]
    fn test_unreadable_file_does_not_poison_the_batch() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "home").unwrap();
        let missing = dir.path().join("missing.txt");

        let dictionary = Dictionary::from_words(["home"]);
        let results = inspect_files(&dictionary, &[missing, good]);

        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }
}
