//! Prefix-indexed word store.
//!
//! The [`PrefixIndex`] keeps words in a character tree with per-node
//! insertion counters and per-word frequencies, answering exact lookups,
//! prefix counts and frequency-ranked autocomplete queries. Erasing a word
//! prunes the branch nodes only that word was using.

pub mod index;
pub mod iter;
pub mod loader;
pub mod node;
pub mod render;
pub mod shared;
pub mod stats;
pub mod suggest;

// Re-export commonly used types
pub use index::{EraseOutcome, PrefixIndex};
pub use iter::{Completion, Completions};
pub use node::TrieNode;
pub use shared::SharedPrefixIndex;
pub use stats::IndexStats;
pub use suggest::{Suggestion, SuggestionShare};
