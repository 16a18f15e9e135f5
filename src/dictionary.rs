//! Reference dictionary for word inspection.
//!
//! A [`Dictionary`] is an immutable set of valid lowercase words, loaded once
//! and shared read-only by every inspection. Membership testing is
//! case-normalized exact match.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// The reference set of accepted words.
///
/// The set is fixed at construction time; there is no mutation API. Because
/// it is never mutated after initialization, a `&Dictionary` can be shared by
/// any number of simultaneous file inspections.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words.
    ///
    /// Words are trimmed and lowercased; empty entries and duplicates are
    /// discarded.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Dictionary { words }
    }

    /// Load a dictionary from a reader with one word per line.
    ///
    /// Surrounding whitespace is trimmed from each line; blank lines are
    /// skipped.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }

        Ok(Dictionary { words })
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let dictionary = Self::load_from_reader(BufReader::new(file))?;
        debug!(
            "loaded {} dictionary words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
