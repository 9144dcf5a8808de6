use std::collections::{HashMap, HashSet};

use super::{InternalNode, SuffixTrie, TrieNode};

/// Mutable node used while rules are being inserted.
///
/// Every path segment is a full node here; leaves only appear when the tree
/// is frozen by [`TrieBuilder::finish`].
#[derive(Debug, Default)]
struct BuildNode {
    children: HashMap<String, BuildNode>,
    has_end: bool,
    wildcard: bool,
    exceptions: HashSet<String>,
}

impl BuildNode {
    fn child_mut(&mut self, label: &str) -> &mut BuildNode {
        self.children.entry(label.to_string()).or_default()
    }

    /// Freeze into a trie node, collapsing end-only nodes into leaves.
    fn freeze(self) -> TrieNode {
        if self.has_end && self.children.is_empty() && !self.wildcard && self.exceptions.is_empty()
        {
            return TrieNode::Leaf;
        }
        TrieNode::Internal(self.freeze_internal())
    }

    fn freeze_internal(self) -> InternalNode {
        InternalNode {
            children: self
                .children
                .into_iter()
                .map(|(label, child)| (label, child.freeze()))
                .collect(),
            has_end: self.has_end,
            wildcard: self.wildcard,
            exceptions: self.exceptions,
        }
    }
}

/// Builds a [`SuffixTrie`] from PSL rules.
#[derive(Debug, Default)]
pub(crate) struct TrieBuilder {
    root: BuildNode,
    rule_count: usize,
}

impl TrieBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert one rule. The rightmost label is inserted first.
    pub(crate) fn insert(&mut self, rule: &str) {
        let rule = rule.trim();
        if rule.is_empty() {
            return;
        }

        let labels: Vec<&str> = rule.split('.').rev().collect();
        let Some((last, path)) = labels.split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for label in path {
            node = node.child_mut(label);
        }

        if *last == "*" {
            node.wildcard = true;
        } else if let Some(excepted) = last.strip_prefix('!') {
            node.exceptions.insert(excepted.to_string());
        } else {
            node.child_mut(last).has_end = true;
        }
        self.rule_count += 1;
    }

    pub(crate) fn finish(self) -> SuffixTrie {
        SuffixTrie {
            root: self.root.freeze_internal(),
            rule_count: self.rule_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(rules: &[&str]) -> SuffixTrie {
        let mut builder = TrieBuilder::new();
        for rule in rules {
            builder.insert(rule);
        }
        builder.finish()
    }

    #[test]
    fn test_insertion_order_independent() {
        let forward = build(&["ac", "com.ac", "edu.ac", "blogspot.com.ac"]);
        let backward = build(&["blogspot.com.ac", "edu.ac", "com.ac", "ac"]);
        assert_eq!(forward.root(), backward.root());
    }

    #[test]
    fn test_leaf_promoted_when_extended() {
        // "co.uk" is inserted as a leaf first, then extended by "blogspot.co.uk"
        let trie = build(&["uk", "co.uk", "blogspot.co.uk"]);
        let co = trie.node(&["uk", "co"]).unwrap();
        assert!(co.is_end());
        assert_eq!(co.child("blogspot"), Some(&TrieNode::Leaf));
    }

    #[test]
    fn test_deep_chain_promotion() {
        let trie = build(&["jp", "kawasaki.jp", "a.b.kawasaki.jp", "b.kawasaki.jp"]);
        assert!(trie.node(&["jp", "kawasaki"]).unwrap().is_end());
        assert!(trie.node(&["jp", "kawasaki", "b"]).unwrap().is_end());
        assert_eq!(trie.node(&["jp", "kawasaki", "b", "a"]), Some(&TrieNode::Leaf));
    }

    #[test]
    fn test_nested_structure_matches_expected() {
        let trie = build(&[
            "ac", "com.ac", "edu.ac", "gov.ac", "net.ac", "mil.ac", "org.ac", "*.ck", "!www.ck",
        ]);

        let ac = trie.node(&["ac"]).unwrap().as_internal().unwrap();
        assert!(ac.has_end());
        assert_eq!(ac.len(), 6);
        for label in ["com", "edu", "gov", "net", "mil", "org"] {
            assert_eq!(ac.child(label), Some(&TrieNode::Leaf), "{label}.ac");
        }

        let ck = trie.node(&["ck"]).unwrap().as_internal().unwrap();
        assert!(!ck.has_end());
        assert!(ck.has_wildcard());
        assert!(ck.is_exception("www"));
        assert!(ck.is_empty());
    }

    #[test]
    fn test_blank_rules_skipped() {
        let trie = build(&["", "  ", "com"]);
        assert_eq!(trie.rule_count(), 1);
        assert_eq!(trie.root().len(), 1);
    }

    #[test]
    fn test_duplicate_rules() {
        let trie = build(&["com", "com", "co.uk", "co.uk"]);
        assert_eq!(trie.node(&["com"]), Some(&TrieNode::Leaf));
        assert_eq!(trie.node(&["uk", "co"]), Some(&TrieNode::Leaf));
    }

    #[test]
    fn test_exception_without_wildcard_stays_internal() {
        let trie = build(&["!city.kawasaki.jp"]);
        let kawasaki = trie.node(&["jp", "kawasaki"]).unwrap();
        assert!(kawasaki.is_exception("city"));
        assert!(!kawasaki.has_wildcard());
    }
}
