//! The prefix index.
//!
//! [`PrefixIndex`] stores words in a character tree and keeps two counters
//! per node: how many live insertions end at the node (`word_count`) and how
//! many pass through it (`prefix_count`). Terminal nodes additionally carry a
//! frequency weight that drives autocomplete ranking.
//!
//! # Examples
//!
//! ```
//! use lexis::trie::{EraseOutcome, PrefixIndex, Suggestion};
//!
//! let mut index = PrefixIndex::new();
//! index.insert_with_weight("test", 200);
//! index.insert_with_weight("tests", 10);
//!
//! assert_eq!(
//!     index.suggest("test", 5),
//!     vec![Suggestion::new("test", 200), Suggestion::new("tests", 10)]
//! );
//!
//! assert!(matches!(index.erase("test"), EraseOutcome::Removed { .. }));
//! assert!(!index.lookup_exact("test"));
//! assert_eq!(index.suggest("test", 5), vec![Suggestion::new("tests", 10)]);
//! ```

use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::config::IndexConfig;
use crate::error::{LexisError, Result};
use crate::trie::iter::Completions;
use crate::trie::node::TrieNode;
use crate::trie::suggest::{self, Suggestion, SuggestionShare};

/// Result of an [`PrefixIndex::erase`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseOutcome {
    /// The word was not in the index; nothing changed.
    NotFound,
    /// One insertion was removed and the word is still present.
    Decremented {
        /// Live insertions of the word left after the erase.
        remaining: u64,
    },
    /// The last insertion was removed and the word is gone.
    Removed {
        /// Number of nodes pruned from the tree.
        pruned: usize,
    },
}

impl EraseOutcome {
    /// Whether the erase changed the index.
    pub fn was_present(&self) -> bool {
        !matches!(self, EraseOutcome::NotFound)
    }

    /// Whether the word is no longer in the index after the erase.
    pub fn is_removed(&self) -> bool {
        matches!(self, EraseOutcome::Removed { .. })
    }
}

/// A prefix tree of words with insertion counts and frequency weights.
///
/// The root stands for the empty prefix and is never removed. Every
/// insertion passes through it, so its prefix count is the number of live
/// insertions in the index.
#[derive(Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    /// Distinct live words.
    words: usize,
    /// Nodes in the tree, root included.
    nodes: usize,
    config: IndexConfig,
    analyzer: Arc<dyn Analyzer>,
}

impl PrefixIndex {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        PrefixIndex {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
            config: IndexConfig::default(),
            analyzer: Arc::new(PipelineAnalyzer::default()),
        }
    }

    /// Create an empty index from configuration.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = PipelineAnalyzer::from_config(&config.analyzer)?;

        Ok(PrefixIndex {
            config,
            analyzer: Arc::new(analyzer),
            ..PrefixIndex::new()
        })
    }

    /// Replace the analyzer used by bulk indexing.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// The configuration of this index.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The root node, for callers that render or walk the tree themselves.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert one occurrence of `word` with weight 1.
    pub fn insert(&mut self, word: &str) {
        self.insert_with_weight(word, 1);
    }

    /// Insert one occurrence of `word`, adding `weight` to its frequency.
    ///
    /// The empty word is accepted and makes the root itself terminal.
    pub fn insert_with_weight(&mut self, word: &str, weight: u64) {
        let mut created = 0;

        self.root.prefix_count += 1;
        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = match node.children.entry(symbol) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created += 1;
                    entry.insert(TrieNode::new())
                }
            };
            node.prefix_count += 1;
        }

        if !node.terminal {
            self.words += 1;
        }
        node.mark_word(word, weight);
        self.nodes += created;
    }

    /// Whether `word` is in the index.
    pub fn lookup_exact(&self, word: &str) -> bool {
        self.root.descend(word).is_some_and(TrieNode::is_terminal)
    }

    /// Number of live insertions of exactly `word`.
    pub fn count_equal(&self, word: &str) -> u64 {
        match self.root.descend(word) {
            Some(node) if node.terminal => node.word_count,
            _ => 0,
        }
    }

    /// Number of live insertions of words starting with `prefix`.
    pub fn count_prefix(&self, prefix: &str) -> u64 {
        self.root.descend(prefix).map_or(0, TrieNode::prefix_count)
    }

    /// Frequency of `word`, or `None` if it is not in the index.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.root
            .descend(word)
            .filter(|node| node.terminal)
            .map(TrieNode::frequency)
    }

    /// Lazily iterate over the words starting with `prefix`, in word order.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        Completions::new(self.root.descend(prefix))
    }

    /// The `limit` most frequent words starting with `prefix`.
    ///
    /// Ties in frequency are broken by word order, so the result is
    /// reproducible. An unknown prefix yields an empty list.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        suggest::rank(self.completions(prefix), limit)
    }

    /// [`suggest`](Self::suggest) with the configured default limit.
    pub fn autocomplete(&self, prefix: &str) -> Vec<Suggestion> {
        self.suggest(prefix, self.config.default_limit)
    }

    /// Like [`suggest`](Self::suggest) but only the words.
    pub fn suggest_words(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.suggest(prefix, limit)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Suggestions with each word's percentage of the returned frequency total.
    pub fn suggest_with_shares(&self, prefix: &str, limit: usize) -> Vec<SuggestionShare> {
        suggest::with_shares(self.suggest(prefix, limit))
    }

    /// Remove one occurrence of `word`.
    ///
    /// When the last occurrence goes away, nodes no live word passes through
    /// any more are pruned, starting at the end of the word and stopping at
    /// the first node still shared with another word.
    pub fn erase(&mut self, word: &str) -> EraseOutcome {
        if self.count_equal(word) == 0 {
            return EraseOutcome::NotFound;
        }

        let path: Vec<char> = word.chars().collect();

        self.root.prefix_count = self.root.prefix_count.saturating_sub(1);
        let mut node = &mut self.root;
        for symbol in &path {
            let Some(child) = node.children.get_mut(symbol) else {
                return EraseOutcome::NotFound;
            };
            child.prefix_count = child.prefix_count.saturating_sub(1);
            node = child;
        }

        if !node.unmark_word() {
            return EraseOutcome::Decremented {
                remaining: node.word_count,
            };
        }

        self.words -= 1;
        let pruned = self.prune(&path);
        self.nodes -= pruned;
        debug!("erased {word:?}, pruned {pruned} nodes");

        EraseOutcome::Removed { pruned }
    }

    /// Remove the unreferenced tail of `path`. Returns the number of nodes removed.
    fn prune(&mut self, path: &[char]) -> usize {
        let mut chain = Vec::with_capacity(path.len());
        let mut node = &self.root;
        for symbol in path {
            let Some(child) = node.children.get(symbol) else {
                break;
            };
            chain.push(child);
            node = child;
        }

        // Walk back from the leaf; `cut` is the shallowest removable depth so far.
        let mut cut = None;
        for (depth, node) in chain.iter().enumerate().rev() {
            let pruned_below = usize::from(cut == Some(depth + 1));
            if node.is_prunable(pruned_below) {
                cut = Some(depth);
            } else {
                break;
            }
        }

        let Some(depth) = cut else {
            return 0;
        };

        let mut parent = &mut self.root;
        for symbol in &path[..depth] {
            let Some(child) = parent.children.get_mut(symbol) else {
                return 0;
            };
            parent = child;
        }
        parent
            .children
            .remove(&path[depth])
            .map_or(0, |removed| removed.subtree_size())
    }

    /// Index free text: analyze it, count each word, and insert every
    /// distinct word once with its count as weight.
    ///
    /// Returns the per-word counts found in the text.
    pub fn bulk_index_text(&mut self, text: &str) -> Result<AHashMap<String, u64>> {
        let counts = count_words(self.analyzer.as_ref(), text)?;
        self.insert_counts(&counts);
        info!("indexed {} distinct words from text", counts.len());
        Ok(counts)
    }

    /// Index several texts, analyzing them in parallel.
    ///
    /// Counts are merged across all texts before insertion, so a word seen in
    /// several texts is inserted once with its total count.
    pub fn index_texts<S>(&mut self, texts: &[S]) -> Result<AHashMap<String, u64>>
    where
        S: AsRef<str> + Sync,
    {
        let analyzer = Arc::clone(&self.analyzer);
        let counts = texts
            .par_iter()
            .map(|text| count_words(analyzer.as_ref(), text.as_ref()))
            .try_reduce(AHashMap::new, |mut merged, counts| {
                for (word, count) in counts {
                    *merged.entry(word).or_insert(0) += count;
                }
                Ok(merged)
            })?;

        self.insert_counts(&counts);
        info!(
            "indexed {} distinct words from {} texts",
            counts.len(),
            texts.len()
        );
        Ok(counts)
    }

    fn insert_counts(&mut self, counts: &AHashMap<String, u64>) {
        for (word, count) in counts {
            self.insert_with_weight(word, *count);
        }
    }

    /// All live words with their frequencies, in word order.
    pub fn export(&self) -> Vec<(String, u64)> {
        self.completions("")
            .map(|completion| (completion.word.to_string(), completion.frequency))
            .collect()
    }

    /// The `n` most frequent words in the whole index.
    pub fn top_words(&self, n: usize) -> Vec<Suggestion> {
        self.suggest("", n)
    }

    /// Number of distinct live words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of live insertions, counting repeats.
    pub fn total_insertions(&self) -> u64 {
        self.root.prefix_count
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Remove every word, keeping configuration and analyzer.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.words = 0;
        self.nodes = 1;
    }
}

/// Count the analyzed words of `text`.
fn count_words(analyzer: &dyn Analyzer, text: &str) -> Result<AHashMap<String, u64>> {
    let mut counts = AHashMap::new();
    for word in analyzer.words(text)? {
        *counts.entry(word).or_insert(0) += 1;
    }
    Ok(counts)
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("words", &self.words)
            .field("insertions", &self.root.prefix_count)
            .field("nodes", &self.nodes)
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl TryFrom<IndexConfig> for PrefixIndex {
    type Error = LexisError;

    fn try_from(config: IndexConfig) -> Result<Self> {
        PrefixIndex::with_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> PrefixIndex {
        words.iter().copied().collect()
    }

    #[test]
    fn test_counts_and_erase_sequence() {
        let mut index = index_of(&["apple", "app", "apply", "app", "bat", "batch"]);

        assert_eq!(index.count_equal("app"), 2);
        assert_eq!(index.count_equal("apple"), 1);
        assert_eq!(index.count_equal("apply"), 1);
        assert_eq!(index.count_equal("bat"), 1);
        assert_eq!(index.count_equal("batch"), 1);
        assert_eq!(index.count_equal("bad"), 0);

        assert_eq!(index.count_prefix("app"), 4);
        assert_eq!(index.count_prefix("ap"), 4);
        assert_eq!(index.count_prefix("b"), 2);
        assert_eq!(index.count_prefix("ba"), 2);
        assert_eq!(index.count_prefix("bat"), 2);
        assert_eq!(index.count_prefix("c"), 0);

        assert_eq!(index.erase("app"), EraseOutcome::Decremented { remaining: 1 });
        assert_eq!(index.count_equal("app"), 1);
        assert_eq!(index.count_prefix("app"), 3);

        assert!(index.erase("apple").is_removed());
        assert_eq!(index.count_equal("apple"), 0);
        assert_eq!(index.count_prefix("app"), 2);

        assert!(index.erase("app").is_removed());
        assert_eq!(index.count_equal("app"), 0);
        assert_eq!(index.count_prefix("app"), 1);

        assert!(index.erase("apply").is_removed());
        assert_eq!(index.count_equal("apply"), 0);
        assert_eq!(index.count_prefix("app"), 0);

        assert!(index.erase("bat").is_removed());
        assert_eq!(index.count_equal("bat"), 0);
        assert_eq!(index.count_prefix("bat"), 1);

        assert!(index.erase("batch").is_removed());
        assert_eq!(index.count_equal("batch"), 0);
        assert_eq!(index.count_prefix("bat"), 0);

        assert_eq!(index.erase("not_in_trie"), EraseOutcome::NotFound);
        assert_eq!(index.count_equal("not_in_trie"), 0);

        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
        assert!(index.root().is_leaf());
    }

    #[test]
    fn test_prune_stops_at_shared_prefix() {
        let mut index = index_of(&["app", "apply"]);
        assert_eq!(index.node_count(), 6);

        // Nothing below "app" can go: "apply" still passes through.
        assert_eq!(index.erase("app"), EraseOutcome::Removed { pruned: 0 });
        assert!(index.lookup_exact("apply"));
        assert!(!index.lookup_exact("app"));
        assert_eq!(index.count_prefix("app"), 1);
        assert_eq!(index.node_count(), 6);

        // "ly" is unique to "apply"; "app" is now unreferenced as well.
        assert_eq!(index.erase("apply"), EraseOutcome::Removed { pruned: 5 });
        assert_eq!(index.node_count(), 1);
    }

    #[test]
    fn test_prune_leaves_sibling_branch() {
        let mut index = index_of(&["car", "cat"]);

        assert_eq!(index.erase("cat"), EraseOutcome::Removed { pruned: 1 });
        assert!(index.lookup_exact("car"));
        assert_eq!(index.count_prefix("ca"), 1);
        assert!(index.root().descend("cat").is_none());
        assert_eq!(index.node_count(), 4);
    }

    #[test]
    fn test_erase_word_with_extension_keeps_path() {
        let mut index = index_of(&["test", "tests"]);

        assert_eq!(index.erase("tests"), EraseOutcome::Removed { pruned: 1 });
        assert!(index.lookup_exact("test"));
        assert!(index.root().descend("test").unwrap().is_leaf());
    }

    #[test]
    fn test_frequency_accumulates() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("тест", 200);
        index.insert_with_weight("тест", 5);

        assert_eq!(index.frequency("тест"), Some(205));
        assert_eq!(index.count_equal("тест"), 2);
        assert_eq!(index.frequency("тес"), None);
        assert_eq!(index.frequency("missing"), None);
    }

    #[test]
    fn test_frequency_survives_partial_erase() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("word", 7);
        index.insert_with_weight("word", 3);

        index.erase("word");
        assert_eq!(index.frequency("word"), Some(10));

        index.erase("word");
        assert_eq!(index.frequency("word"), None);

        index.insert_with_weight("word", 2);
        assert_eq!(index.frequency("word"), Some(2));
    }

    #[test]
    fn test_frequency_untouched_by_other_erases() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("car", 4);
        index.insert_with_weight("cart", 9);

        index.erase("cart");
        assert_eq!(index.frequency("car"), Some(4));
    }

    #[test]
    fn test_empty_word() {
        let mut index = PrefixIndex::new();
        index.insert("");
        index.insert("a");

        assert!(index.lookup_exact(""));
        assert_eq!(index.count_equal(""), 1);
        assert_eq!(index.count_prefix(""), 2);
        assert_eq!(index.len(), 2);

        assert!(index.erase("").is_removed());
        assert!(!index.lookup_exact(""));
        assert_eq!(index.count_prefix(""), 1);
        assert!(index.lookup_exact("a"));
    }

    #[test]
    fn test_suggest() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("cat", 5);
        index.insert_with_weight("car", 5);
        index.insert_with_weight("cap", 3);
        index.insert_with_weight("dog", 9);

        assert_eq!(
            index.suggest("ca", 2),
            vec![Suggestion::new("car", 5), Suggestion::new("cat", 5)]
        );
        assert_eq!(index.suggest_words("ca", 10), vec!["car", "cat", "cap"]);
        assert!(index.suggest("x", 5).is_empty());
        assert!(index.suggest("ca", 0).is_empty());
        assert_eq!(index.top_words(1), vec![Suggestion::new("dog", 9)]);
    }

    #[test]
    fn test_autocomplete_uses_default_limit() {
        let mut config = IndexConfig::default();
        config.default_limit = 2;
        let mut index = PrefixIndex::with_config(config).unwrap();
        index.extend(["pro", "prod", "proto", "prove"]);

        assert_eq!(index.autocomplete("pro").len(), 2);
    }

    #[test]
    fn test_suggest_with_shares() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("test", 300);
        index.insert_with_weight("text", 100);

        let shares = index.suggest_with_shares("te", 5);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].word, "test");
        assert!((shares[0].percentage - 75.0).abs() < 1e-9);
        assert!((shares[1].percentage - 25.0).abs() < 1e-9);

        assert!(index.suggest_with_shares("zz", 5).is_empty());
    }

    #[test]
    fn test_bulk_index_text() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("тестирование", 110);

        let counts = index
            .bulk_index_text("Тестирование программ. Тестирование помогает! Hello, hello 42")
            .unwrap();

        assert_eq!(counts.get("тестирование"), Some(&2));
        assert_eq!(counts.get("hello"), Some(&2));
        assert_eq!(counts.get("программ"), Some(&1));
        assert_eq!(counts.len(), 4);

        assert_eq!(index.frequency("тестирование"), Some(112));
        assert_eq!(index.count_equal("тестирование"), 2);
        assert_eq!(index.frequency("hello"), Some(2));
        assert_eq!(index.count_equal("hello"), 1);
        assert!(!index.lookup_exact("Hello"));
    }

    #[test]
    fn test_index_texts_merges_counts() {
        let mut index = PrefixIndex::new();
        let counts = index
            .index_texts(&["alpha beta", "Beta gamma", "beta"])
            .unwrap();

        assert_eq!(counts.get("beta"), Some(&3));
        assert_eq!(index.frequency("beta"), Some(3));
        assert_eq!(index.count_equal("beta"), 1);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_export_and_clear() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("b", 1);
        index.insert_with_weight("a", 2);
        index.insert_with_weight("ab", 3);

        assert_eq!(
            index.export(),
            vec![
                ("a".to_string(), 2),
                ("ab".to_string(), 3),
                ("b".to_string(), 1)
            ]
        );

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.total_insertions(), 0);
        assert!(index.export().is_empty());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = IndexConfig::default();
        config.default_limit = 0;
        assert!(PrefixIndex::with_config(config.clone()).is_err());
        assert!(PrefixIndex::try_from(config).is_err());
    }
}
