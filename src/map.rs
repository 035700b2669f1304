//! Ordered, name-keyed map used for sections and items.
//!
//! This module provides [`NamedMap`], a wrapper around [`IndexMap`] keyed by
//! `String`. Both the sections of a document and the items of a section live in
//! one, so `sections()`, `items()` and serialization all follow insertion order
//! instead of hash order.
//!
//! ## Ordering rules
//!
//! - **Insert**: a new name goes to the end; an existing name keeps its position
//!   and gets the new value
//! - **Remove**: later entries shift down, relative order is kept
//! - **Rename**: the entry keeps its position; an entry already holding the new
//!   name is dropped first
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::NamedMap;
//!
//! let mut map = NamedMap::new();
//! map.insert("b".to_string(), 2);
//! map.insert("a".to_string(), 1);
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["b", "a"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map from names to values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedMap<V>(IndexMap<String, V>);

impl<V> NamedMap<V> {
    /// Creates an empty `NamedMap`.
    #[must_use]
    pub fn new() -> Self {
        NamedMap(IndexMap::new())
    }

    /// Inserts a value under `name`, returning the value it replaced.
    ///
    /// Replacing keeps the original position of `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::NamedMap;
    ///
    /// let mut map = NamedMap::new();
    /// assert!(map.insert("key".to_string(), 1).is_none());
    /// assert_eq!(map.insert("key".to_string(), 2), Some(1));
    /// ```
    pub fn insert(&mut self, name: String, value: V) -> Option<V> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.0.get_mut(name)
    }

    /// Returns the value for `name`, inserting the result of `default` first if absent.
    pub fn get_or_insert_with<F>(&mut self, name: &str, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.0.entry(name.to_string()).or_insert_with(default)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes `name`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.0.shift_remove(name)
    }

    /// Re-keys the entry `old` to `new` without moving it.
    ///
    /// Returns `false` if `old` is absent. If `new` already names another entry,
    /// that entry is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::NamedMap;
    ///
    /// let mut map = NamedMap::new();
    /// map.insert("a".to_string(), 1);
    /// map.insert("b".to_string(), 2);
    /// map.insert("c".to_string(), 3);
    ///
    /// assert!(map.rename("b", "z"));
    /// let keys: Vec<_> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["a", "z", "c"]);
    ///
    /// assert!(!map.rename("missing", "x"));
    /// ```
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if !self.0.contains_key(old) {
            return false;
        }
        if old == new {
            return true;
        }
        self.0.shift_remove(new);
        match self.0.shift_remove_full(old) {
            Some((index, _, value)) => {
                self.0.shift_insert(index, new.to_string(), value);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the name-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V> Default for NamedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a NamedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> IntoIterator for NamedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V> FromIterator<(String, V)> for NamedMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        NamedMap(IndexMap::from_iter(iter))
    }
}
