//! Text rendering of the tree structure.

use crate::trie::index::PrefixIndex;
use crate::trie::node::TrieNode;

const INDENT: &str = "  ";

/// Render the subtree under `root` as an indented outline.
///
/// Each line is one node: its edge symbol indented by depth, followed by the
/// stored word and frequency when the node is terminal. Nodes deeper than
/// `max_depth` are omitted.
pub fn render_tree(root: &TrieNode, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str("<root>");
    if root.terminal {
        out.push_str(&annotation("", root.frequency));
    }
    out.push('\n');

    let within = |depth: usize| max_depth.is_none_or(|max| depth < max);

    let mut stack: Vec<(char, &TrieNode, usize)> = Vec::new();
    if within(0) {
        stack.extend(root.children().rev().map(|(symbol, child)| (symbol, child, 1)));
    }

    while let Some((symbol, node, depth)) = stack.pop() {
        out.push_str(&INDENT.repeat(depth));
        out.push(symbol);
        if let Some(word) = node.word().filter(|_| node.terminal) {
            out.push_str(&annotation(word, node.frequency));
        }
        out.push('\n');

        if within(depth) {
            stack.extend(
                node.children()
                    .rev()
                    .map(|(symbol, child)| (symbol, child, depth + 1)),
            );
        }
    }

    out
}

fn annotation(word: &str, frequency: u64) -> String {
    format!(" [word: {word:?}, frequency: {frequency}]")
}

impl PrefixIndex {
    /// Render the whole tree, optionally limited to `max_depth` levels.
    pub fn render_tree(&self, max_depth: Option<usize>) -> String {
        render_tree(self.root(), max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_tree() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("ab", 2);
        index.insert_with_weight("b", 1);

        let rendered = index.render_tree(None);
        assert_eq!(
            rendered,
            "<root>\n  a\n    b [word: \"ab\", frequency: 2]\n  b [word: \"b\", frequency: 1]\n"
        );
    }

    #[test]
    fn test_render_depth_limit() {
        let mut index = PrefixIndex::new();
        index.insert("abc");

        let rendered = index.render_tree(Some(1));
        assert_eq!(rendered, "<root>\n  a\n");

        let rendered = index.render_tree(Some(0));
        assert_eq!(rendered, "<root>\n");
    }

    #[test]
    fn test_render_terminal_root() {
        let mut index = PrefixIndex::new();
        index.insert_with_weight("", 4);
        assert_eq!(index.render_tree(None), "<root> [word: \"\", frequency: 4]\n");
    }
}
