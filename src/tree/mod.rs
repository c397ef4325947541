//! Content Tree
//!
//! The nested map produced by a walk. Each directory level becomes a
//! [`ContentTree`]; subdirectories nest as [`Node::Directory`] and decoded
//! files sit at the leaves as [`Node::Leaf`].

pub mod blocking;
pub mod key;
pub mod path;
pub mod value;
pub mod walker;

pub use value::Value;

use std::collections::btree_map::{self, BTreeMap};
use tracing::warn;

/// One entry of a content tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Directory(ContentTree),
    Leaf(Value),
}

impl Node {
    pub fn as_tree(&self) -> Option<&ContentTree> {
        match self {
            Node::Directory(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Directory(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Directory(tree) => tree.to_json(),
            Node::Leaf(value) => value.to_json(),
        }
    }
}

/// Materialized directory contents, keyed by resolved entry name
///
/// Keys are unique per level. Iteration is in key order, which carries no
/// meaning beyond making output stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTree {
    entries: BTreeMap<String, Node>,
}

impl ContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Look up a nested entry by `/`-separated keys, e.g. `"env/production"`
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut node = self.entries.get(segments.next()?)?;
        for segment in segments {
            node = node.as_tree()?.entries.get(segment)?;
        }
        Some(node)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, Node> {
        self.entries
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(key, node)| (key.clone(), node.to_json()))
                .collect(),
        )
    }

    /// Bind a resolved entry. Callers feed entries in sorted-name order, so
    /// when two names resolve to the same key the later name wins.
    pub(crate) fn insert(&mut self, key: String, node: Node) {
        if self.entries.contains_key(&key) {
            warn!(key = %key, "Key collision in directory, later entry replaces earlier one");
        }
        self.entries.insert(key, node);
    }

    /// Assemble one directory level from per-entry results
    pub(crate) fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<(String, Node)>>,
    {
        let mut tree = ContentTree::new();
        for (key, node) in entries.into_iter().flatten() {
            tree.insert(key, node);
        }
        tree
    }
}

impl<'a> IntoIterator for &'a ContentTree {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
