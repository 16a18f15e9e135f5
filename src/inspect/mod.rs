//! Inspection engine for lexiscan.
//!
//! Combines the analysis pipeline with a [`crate::dictionary::Dictionary`]
//! to classify each token of a file as ignored (numeric), known (in the
//! dictionary), or an issue (unknown), then reclassifies high-frequency
//! unknown tokens as accepted names.

pub mod frequency;
pub mod inspector;
pub mod report;

// Re-export commonly used types
pub use frequency::*;
pub use inspector::*;
pub use report::*;
