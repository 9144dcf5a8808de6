//! Public Suffix List trie.
//!
//! Suffixes are stored label by label, rightmost label first, so a host is
//! matched by walking its labels from the TLD towards the left:
//!
//! ```text
//! com.cn  ->  root -> "cn" -> "com"
//! *.ck    ->  root -> "ck" (wildcard)
//! !www.ck ->  root -> "ck" (exception "www")
//! ```
//!
//! ## Example
//!
//! ```
//! use fasttld::trie::{SuffixTrie, TrieNode};
//!
//! let trie = SuffixTrie::new(["cn", "com.cn", "*.ck", "!www.ck"]);
//!
//! assert!(matches!(trie.node(&["cn", "com"]), Some(TrieNode::Leaf)));
//! assert!(trie.node(&["ck"]).unwrap().has_wildcard());
//! assert!(trie.node(&["ck"]).unwrap().is_exception("www"));
//! ```

mod builder;
mod matcher;

pub use matcher::HostParts;

use std::collections::{HashMap, HashSet};

use builder::TrieBuilder;

/// A node of the suffix trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    /// The path so far is a complete suffix and nothing extends it
    Leaf,
    /// The path so far has children, a wildcard level, or both
    Internal(InternalNode),
}

impl TrieNode {
    /// Internal node view, `None` for a leaf.
    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            TrieNode::Leaf => None,
            TrieNode::Internal(inner) => Some(inner),
        }
    }

    /// Whether the path ending at this node is itself a suffix.
    pub fn is_end(&self) -> bool {
        match self {
            TrieNode::Leaf => true,
            TrieNode::Internal(inner) => inner.has_end,
        }
    }

    /// Child node for `label`.
    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.as_internal().and_then(|inner| inner.child(label))
    }

    /// Whether a `*` rule sits at this level.
    pub fn has_wildcard(&self) -> bool {
        self.as_internal().is_some_and(|inner| inner.wildcard)
    }

    /// Whether `!label` is registered at this level.
    pub fn is_exception(&self, label: &str) -> bool {
        self.as_internal()
            .is_some_and(|inner| inner.is_exception(label))
    }
}

/// Node with children and/or wildcard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalNode {
    pub(crate) children: HashMap<String, TrieNode>,
    /// The path is a suffix even though children extend it (`cn` vs `com.cn`)
    pub(crate) has_end: bool,
    pub(crate) wildcard: bool,
    /// Labels carved out of the wildcard, stored without the leading `!`
    pub(crate) exceptions: HashSet<String>,
}

impl InternalNode {
    /// Child node for `label`.
    #[inline]
    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }

    /// Whether the path ending here is itself a suffix.
    pub fn has_end(&self) -> bool {
        self.has_end
    }

    /// Whether a `*` rule sits at this level.
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether `!label` is registered at this level.
    #[inline]
    pub fn is_exception(&self, label: &str) -> bool {
        self.exceptions.contains(label)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable suffix trie built from a list of PSL rules.
#[derive(Debug, Clone, Default)]
pub struct SuffixTrie {
    root: InternalNode,
    rule_count: usize,
}

impl SuffixTrie {
    /// Build a trie from PSL rules (`com`, `co.uk`, `*.ck`, `!www.ck`).
    ///
    /// Blank entries are skipped. Insertion order does not matter.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        for rule in rules {
            builder.insert(rule.as_ref());
        }
        builder.finish()
    }

    /// Root of the trie (never a leaf).
    pub fn root(&self) -> &InternalNode {
        &self.root
    }

    /// Look up the node for a TLD-first label path, e.g. `["uk", "co"]`.
    pub fn node(&self, path: &[&str]) -> Option<&TrieNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.child(first)?;
        for label in rest {
            node = node.child(label)?;
        }
        Some(node)
    }

    /// Whether `suffix` (dot-separated, e.g. `co.uk`) is a complete rule.
    pub fn contains(&self, suffix: &str) -> bool {
        let path: Vec<&str> = suffix.split('.').rev().collect();
        self.node(&path).is_some_and(TrieNode::is_end)
    }

    /// Number of rules inserted.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Check if the trie holds no rules
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.wildcard
    }
}
