//! Ordered map type backing JSONH objects.
//!
//! This module provides [`NodeMap`], a wrapper around [`IndexMap`] that
//! preserves insertion order for object properties. JSONH objects apply
//! last-write-wins semantics for duplicate property names, but the order in
//! which the *surviving* properties iterate still matters to callers
//! rendering or diffing the tree, so an insertion-ordered map is used rather
//! than a [`HashMap`].
//!
//! ## Why IndexMap?
//!
//! - **Iteration order**: properties are visited in the order their
//!   surviving value was last written, matching what a human reading the
//!   source document would expect.
//! - **Duplicate keys**: inserting an existing key overwrites the value in
//!   place without moving it to the end, while a brand-new key is appended.
//!
//! ## Examples
//!
//! ```rust
//! use jsonh::{NodeMap, Node};
//!
//! let mut map = NodeMap::new();
//! map.insert("name".to_string(), Node::from("Alice"));
//! map.insert("age".to_string(), Node::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of property names to JSONH nodes.
///
/// This is a thin wrapper around [`IndexMap`] that preserves insertion
/// order, including for keys overwritten by a later duplicate property.
///
/// # Examples
///
/// ```rust
/// use jsonh::{NodeMap, Node};
///
/// let mut map = NodeMap::new();
/// map.insert("first".to_string(), Node::from(1));
/// map.insert("second".to_string(), Node::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMap(IndexMap<String, crate::Node>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a property, overwriting any existing value for `key` in
    /// place (last-write-wins, without moving the key to the end).
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonh::{NodeMap, Node};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), Node::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Node::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Node) -> Option<crate::Node> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Node> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains a property named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the property names, in iteration order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Node> {
        self.0.keys()
    }

    /// Returns an iterator over the property values, in iteration order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Node> {
        self.0.values()
    }

    /// Returns an iterator over the `(name, value)` pairs, in iteration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Node> {
        self.0.iter()
    }
}

impl Default for NodeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Node>> for NodeMap {
    fn from(map: HashMap<String, crate::Node>) -> Self {
        NodeMap(map.into_iter().collect())
    }
}

impl From<NodeMap> for HashMap<String, crate::Node> {
    fn from(map: NodeMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, crate::Node);
    type IntoIter = indexmap::map::IntoIter<String, crate::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a crate::Node);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Node)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}
