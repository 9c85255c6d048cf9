//! Index statistics.

use serde::{Deserialize, Serialize};

use crate::trie::index::PrefixIndex;

/// Summary figures for a prefix index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct live words.
    pub words: usize,
    /// Live insertions, counting repeats.
    pub insertions: u64,
    /// Nodes in the tree, root included.
    pub nodes: usize,
    /// Sum of the frequencies of all words.
    pub total_frequency: u64,
    /// Length in characters of the longest word.
    pub max_depth: usize,
}

impl PrefixIndex {
    /// Compute statistics over the whole index.
    pub fn stats(&self) -> IndexStats {
        let (total_frequency, max_depth) =
            self.completions("")
                .fold((0u64, 0usize), |(total, depth), completion| {
                    (
                        total.saturating_add(completion.frequency),
                        depth.max(completion.word.chars().count()),
                    )
                });

        IndexStats {
            words: self.len(),
            insertions: self.total_insertions(),
            nodes: self.node_count(),
            total_frequency,
            max_depth,
        }
    }
}
