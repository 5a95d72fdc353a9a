use std::collections::HashMap;

/// Prefix tree node
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Adds a word below this node. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = word
            .chars()
            .fold(self, |node, c| node.children.entry(c).or_default());

        !std::mem::replace(&mut node.terminal, true)
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Follow every character of `fragment`, returning the node it ends on
    pub fn descend(&self, fragment: &str) -> Option<&TrieNode> {
        fragment.chars().try_fold(self, |node, c| node.child(c))
    }

    /// True if a word ends at this node
    pub fn is_word(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie() {
        let vocab = ["CAT", "CATS", "DOG", "MOUSE", "MOOSE"];

        let mut root = TrieNode::default();
        for w in vocab {
            assert!(root.insert(w), "{} should be newly inserted", w);
        }
        assert!(!root.insert("CAT"), "Duplicate insert should report false");

        let cat = root.descend("CAT").unwrap();
        assert!(cat.is_word());
        assert!(cat.child('S').is_some_and(TrieNode::is_word), "CAT continues to CATS");

        let moo = root.descend("MOO").unwrap();
        assert!(!moo.is_word());
        assert!(moo.child('S').is_some());
        assert!(root.descend("MOX").is_none());
    }

    #[test]
    fn test_descend_empty_fragment_stays_put() {
        let mut root = TrieNode::default();
        root.insert("A");
        let same = root.descend("").unwrap();
        assert!(std::ptr::eq(same, &root));
    }
}
