//! # lexiscan
//!
//! A directory-tree text inspector that reports words missing from a
//! reference dictionary.
//!
//! ## Features
//!
//! - Line-tracking whitespace tokenization with typographic normalization
//! - Canonical word normalization (punctuation stripping, possessives)
//! - Numeric and monetary literal recognition
//! - Frequency-based promotion of recurring unknown words to names
//! - Parallel inspection of many files over one shared dictionary

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod inspect;
pub mod parallel_inspect;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
