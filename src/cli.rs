//! Command line interface for the Lexis word store.
//!
//! The index lives in memory only, so every invocation builds it from the
//! word lists and texts given on the command line and then runs one query.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
