//! An insertion-ordered map keyed by attribute names.
//!
//! Rendering walks attributes in the order they were first written, so the same builder
//! chain always produces the same markup.

use std::borrow::Cow;
use std::hash::BuildHasherDefault;

use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// The key type used for every attribute map.
pub type AttributeName = Cow<'static, str>;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// A map that remembers the order in which keys were first inserted.
///
/// Overwriting a key keeps its original position. Removing a key shifts the
/// remaining entries so their relative order is untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct SortMap<V> {
    entries: FxIndexMap<AttributeName, V>,
}

impl<V> Default for SortMap<V> {
    fn default() -> Self {
        Self {
            entries: FxIndexMap::default(),
        }
    }
}

impl<V> SortMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the key was already present.
    pub fn insert(&mut self, key: impl Into<AttributeName>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Get the value for `key`, inserting `V::default()` at the end if it is missing.
    pub fn entry_or_default(&mut self, key: impl Into<AttributeName>) -> &mut V
    where
        V: Default,
    {
        self.entry_or_insert_with(key, V::default)
    }

    pub fn entry_or_insert_with(
        &mut self,
        key: impl Into<AttributeName>,
        default: impl FnOnce() -> V,
    ) -> &mut V {
        match self.entries.entry(key.into()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| &**k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Drop every entry for which `keep` returns false, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &mut V) -> bool) {
        self.entries.retain(|k, v| keep(&**k, v));
    }
}

impl<K, V> FromIterator<(K, V)> for SortMap<V>
where
    K: Into<AttributeName>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for SortMap<V>
where
    K: Into<AttributeName>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut map = SortMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("b", 3);

        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("b", &3), ("a", &2)]);
    }

    #[test]
    fn remove_shifts_rest() {
        let mut map: SortMap<i32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
        assert_eq!(map.remove("y"), Some(2));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "z"]);

        // absent keys are ignored
        assert_eq!(map.remove("nope"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn owned_and_static_keys_collide() {
        let mut map = SortMap::new();
        map.insert("id", "a");
        map.insert(String::from("id"), "b");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("id"), Some(&"b"));
    }
}
