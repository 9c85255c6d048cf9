//! Tree nodes of the prefix index.

use std::collections::BTreeMap;

/// A single position in the prefix tree.
///
/// Every node owns its children outright, keyed by the symbol on the edge
/// leading to them. The ordered map gives lexicographic traversal order for
/// free, which keeps completions, exports and renderings reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) terminal: bool,
    pub(crate) word_count: u64,
    pub(crate) prefix_count: u64,
    pub(crate) frequency: u64,
    pub(crate) stored_word: Option<String>,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of live insertions of the exact word ending here.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Number of live insertions passing through this node.
    pub fn prefix_count(&self) -> u64 {
        self.prefix_count
    }

    /// Aggregated weight of the word ending here.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// The word ending at this node, if any.
    pub fn word(&self) -> Option<&str> {
        self.stored_word.as_deref()
    }

    /// Iterate over children in symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Get the child reached through `symbol`.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node no live word references any more, once `detached` of its
    /// children have been removed.
    pub(crate) fn is_prunable(&self, detached: usize) -> bool {
        self.prefix_count == 0 && !self.terminal && self.children.len() <= detached
    }

    /// Follow `path` symbol by symbol from this node.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(self, |node, symbol| node.children.get(&symbol))
    }

    /// Record one insertion of `word` ending at this node.
    pub(crate) fn mark_word(&mut self, word: &str, weight: u64) {
        self.terminal = true;
        self.word_count += 1;
        self.frequency = self.frequency.saturating_add(weight);
        if self.stored_word.is_none() {
            self.stored_word = Some(word.to_string());
        }
    }

    /// Remove one insertion of the word ending here.
    ///
    /// Returns `true` when the last insertion went away and the node stopped
    /// being terminal.
    pub(crate) fn unmark_word(&mut self) -> bool {
        self.word_count = self.word_count.saturating_sub(1);
        if self.word_count == 0 {
            self.terminal = false;
            self.frequency = 0;
            self.stored_word = None;
            true
        } else {
            false
        }
    }

    /// Count the nodes of this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_unmark() {
        let mut node = TrieNode::new();
        assert!(!node.is_terminal());

        node.mark_word("cat", 3);
        node.mark_word("cat", 2);
        assert!(node.is_terminal());
        assert_eq!(node.word_count(), 2);
        assert_eq!(node.frequency(), 5);
        assert_eq!(node.word(), Some("cat"));

        assert!(!node.unmark_word());
        assert!(node.is_terminal());
        assert_eq!(node.frequency(), 5);

        assert!(node.unmark_word());
        assert!(!node.is_terminal());
        assert_eq!(node.frequency(), 0);
        assert_eq!(node.word(), None);
    }

    #[test]
    fn test_descend_and_subtree_size() {
        let mut root = TrieNode::new();
        let a = root.children.entry('a').or_default();
        a.children.entry('b').or_default();
        a.children.entry('c').or_default();

        assert!(root.descend("ab").is_some());
        assert!(root.descend("ad").is_none());
        assert_eq!(root.descend(""), Some(&root));
        assert_eq!(root.subtree_size(), 4);
    }

    #[test]
    fn test_prunable() {
        let mut node = TrieNode::new();
        assert!(node.is_prunable(0));

        node.prefix_count = 1;
        assert!(!node.is_prunable(0));

        node.prefix_count = 0;
        node.children.insert('x', TrieNode::new());
        assert!(!node.is_prunable(0));
        assert!(node.is_prunable(1));

        node.mark_word("x", 1);
        assert!(!node.is_prunable(1));
    }
}
