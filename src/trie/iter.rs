//! Lazy traversal over the words stored below a node.

use crate::trie::node::TrieNode;

/// A word found under a prefix, borrowed from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion<'a> {
    /// The full stored word.
    pub word: &'a str,
    /// The aggregated frequency of the word.
    pub frequency: u64,
    /// The number of live insertions of the word.
    pub count: u64,
}

/// Pre-order, depth-first iterator over the terminal nodes of a subtree.
///
/// Words are produced in lexicographic order. The iterator only borrows the
/// tree, so cloning it gives an independent cursor that restarts from the
/// same position.
#[derive(Debug, Clone)]
pub struct Completions<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Completions<'a> {
    /// Start a traversal at `start`, or an empty one if there is no node.
    pub(crate) fn new(start: Option<&'a TrieNode>) -> Self {
        Completions {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = Completion<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reverse so the smallest symbol is popped first.
            self.stack.extend(node.children.values().rev());

            if node.terminal
                && let Some(word) = node.stored_word.as_deref()
            {
                return Some(Completion {
                    word,
                    frequency: node.frequency,
                    count: node.word_count,
                });
            }
        }
        None
    }
}
