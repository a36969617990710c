//! Insertion-ordered record type.
//!
//! [`KeyMap`] wraps [`IndexMap`] so that records iterate in insertion order.
//! The walker's contract depends on this: output keys appear in the same
//! order as the input keys they were renamed from, and when two renamed keys
//! collide the later value wins while the entry keeps its first position,
//! the same overwrite behavior a JavaScript object literal has.
//!
//! ## Examples
//!
//! ```rust
//! use keycase::{KeyMap, Value};
//!
//! let mut map = KeyMap::new();
//! map.insert("user_name".to_string(), Value::from("Alice"));
//! map.insert("user_age".to_string(), Value::from(30));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["user_name", "user_age"]);
//! ```

use crate::value::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to [`Value`]s.
///
/// # Examples
///
/// ```rust
/// use keycase::{KeyMap, Value};
///
/// let mut map = KeyMap::new();
/// map.insert("id".to_string(), Value::from(7));
/// assert_eq!(map.get("id").and_then(|v| v.as_i64()), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyMap(IndexMap<String, Value>);

impl KeyMap {
    /// Creates an empty `KeyMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyMap(IndexMap::new())
    }

    /// Creates an empty `KeyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair.
    ///
    /// If the key was already present its value is replaced (and returned)
    /// while the entry keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for KeyMap {
    fn from(map: HashMap<String, Value>) -> Self {
        KeyMap(map.into_iter().collect())
    }
}

impl IntoIterator for KeyMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        KeyMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_iteration_order() {
        let mut map = KeyMap::new();
        map.insert("zeta".to_string(), Value::from(1));
        map.insert("alpha".to_string(), Value::from(2));
        map.insert("mid".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_replaces_value_keeps_position() {
        let mut map = KeyMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        let old = map.insert("a".to_string(), Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        assert_eq!(map.get("a").and_then(|v| v.as_i64()), Some(3));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
