//! Text analysis module for lexiscan.
//!
//! This module provides the text analysis pipeline that feeds the inspection
//! engine: per-line typographic character filtering, whitespace tokenization
//! with line tracking, word normalization, and numeric-literal classification.

pub mod char_filter;
pub mod normalizer;
pub mod numeric;
pub mod tokenizer;

// Re-export commonly used types
pub use char_filter::*;
pub use normalizer::*;
pub use numeric::*;
pub use tokenizer::*;
