//! Error types for the lexiscan library.
//!
//! All errors are represented by the [`LexiscanError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use lexiscan::error::{LexiscanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LexiscanError::dictionary("Empty word list"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexiscan operations.
///
/// This enum represents all possible errors that can occur in the lexiscan
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum LexiscanError {
    /// I/O errors (file reads, directory walks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (loading, empty word lists, etc.)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Analysis-related errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Inspection-related errors
    #[error("Inspection error: {0}")]
    Inspection(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexiscanError.
pub type Result<T> = std::result::Result<T, LexiscanError>;

impl LexiscanError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Analysis(msg.into())
    }

    /// Create a new inspection error.
    pub fn inspection<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Inspection(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Other(format!("Not found: {}", msg.into()))
    }
}
