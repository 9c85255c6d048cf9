//! Error types for the Lexis library.
//!
//! The prefix index itself has no failure modes: lookups on absent paths
//! return zero values and erasing an unknown word is a reported outcome, not
//! an error. Errors only arise at the edges of the crate, where text is
//! tokenized with configurable patterns, word lists are read from disk and
//! configuration is parsed. All of them are represented by [`LexisError`].
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (reading word lists, corpora, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Malformed input lines in word or frequency files
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid caller input, such as a zero result limit
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying extra context, such as the file being read
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexisError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexisError::Parse(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
