//! # Lexis
//!
//! A prefix-indexed word store with frequency-ranked autocomplete.
//!
//! ## Features
//!
//! - Character tree with per-node insertion and prefix counters
//! - Exact lookups, prefix counts and ranked suggestions
//! - Erasure that prunes only the branches no other word uses
//! - Bulk indexing of Latin and Cyrillic text
//! - Optional reader-writer locked handle for shared use
//!
//! ```
//! use lexis::prelude::*;
//!
//! let mut index = PrefixIndex::new();
//! index.bulk_index_text("Тест, тест и test").unwrap();
//!
//! assert_eq!(index.count_prefix("т"), 1);
//! assert_eq!(index.frequency("тест"), Some(2));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod trie;

pub mod prelude {
    pub use crate::config::IndexConfig;
    pub use crate::error::{LexisError, Result};
    pub use crate::trie::{
        EraseOutcome, IndexStats, PrefixIndex, SharedPrefixIndex, Suggestion, SuggestionShare,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
