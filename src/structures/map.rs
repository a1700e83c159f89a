//! Association list keyed by equality.
//!
//! [`NonHashMap`] stores its entries in a [`Deque`] and finds keys by linear
//! scan, so keys need neither `Hash` nor `Ord`, only `PartialEq`. Entries keep
//! their insertion order.
//!
//! # Examples
//!
//! ```rust
//! use linked_collections::error::KeyErrorKind;
//! use linked_collections::structures::NonHashMap;
//!
//! let mut map = NonHashMap::new();
//! map.add("one", 1).unwrap();
//! map.add("two", 2).unwrap();
//!
//! let error = map.add("one", 100).unwrap_err();
//! assert_eq!(error.kind, KeyErrorKind::Duplicate);
//!
//! assert_eq!(map.update("one", 11), Ok(1));
//! assert_eq!(map[&"one"], 11);
//! assert_eq!(format!("{map}"), "{one: 11, two: 2}");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use super::deque::{self, Deque};
use crate::error::KeyError;

const MAPPING_TYPE: &str = "NonHashMap";

#[derive(Clone, PartialEq, Eq)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A map that compares keys with `PartialEq` and keeps insertion order.
///
/// Every lookup is a linear scan.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `add`      | O(n)       |
/// | `get`      | O(n)       |
/// | `remove`   | O(n)       |
/// | `contains` | O(n)       |
/// | `len`      | O(1)       |
#[derive(Clone, PartialEq, Eq)]
pub struct NonHashMap<K, V> {
    entries: Deque<Entry<K, V>>,
}

impl<K, V> NonHashMap<K, V> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<K: PartialEq, V> NonHashMap<K, V> {
    /// Builds a map from `(key, value)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-key [`KeyError`] for the first key that appears
    /// twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::structures::NonHashMap;
    ///
    /// let map = NonHashMap::try_from_pairs([(1, "a"), (2, "b")]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let error = NonHashMap::try_from_pairs([(1, "a"), (1, "b")]).unwrap_err();
    /// assert_eq!(error.key, 1);
    /// ```
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, KeyError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        tracing::trace!("building map from pairs");
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add(key, value)?;
        }
        Ok(map)
    }

    /// Adds a new entry at the end of the map.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-key [`KeyError`] carrying `key` if the key is
    /// already present; the map is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<(), KeyError<K>> {
        if self.contains(&key) {
            return Err(KeyError::duplicate(key, MAPPING_TYPE));
        }
        self.entries.append(Entry { key, value });
        Ok(())
    }

    /// Replaces the value stored under `key` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns a missing-key [`KeyError`] carrying `key` if the key is absent.
    pub fn update(&mut self, key: K, value: V) -> Result<V, KeyError<K>> {
        match self.value_mut(&key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(KeyError::missing(key, MAPPING_TYPE)),
        }
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == *key)
    }

    fn value(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }
}

impl<K: PartialEq + Clone, V> NonHashMap<K, V> {
    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a missing-key [`KeyError`] if the key is absent.
    pub fn get(&self, key: &K) -> Result<&V, KeyError<K>> {
        self.value(key)
            .ok_or_else(|| KeyError::missing(key.clone(), MAPPING_TYPE))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a missing-key [`KeyError`] if the key is absent.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyError<K>> {
        self.value_mut(key)
            .ok_or_else(|| KeyError::missing(key.clone(), MAPPING_TYPE))
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns a missing-key [`KeyError`] if the key is absent; the map is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linked_collections::error::KeyErrorKind;
    /// use linked_collections::structures::NonHashMap;
    ///
    /// let mut map = NonHashMap::try_from_pairs([(1, 'a'), (2, 'b')]).unwrap();
    /// assert_eq!(map.remove(&1), Ok('a'));
    /// assert_eq!(map.remove(&1).unwrap_err().kind, KeyErrorKind::Missing);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V, KeyError<K>> {
        let missing = || KeyError::missing(key.clone(), MAPPING_TYPE);
        let position = self.position(key).ok_or_else(missing)?;
        self.entries
            .pop(position)
            .map(|entry| entry.value)
            .map_err(|_| missing())
    }
}

impl<K: Clone, V> NonHashMap<K, V> {
    /// Returns a copy of every key, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Deque<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl<K, V: Clone> NonHashMap<K, V> {
    /// Returns a copy of every value, in insertion order.
    #[must_use]
    pub fn values(&self) -> Deque<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

/// An iterator over the `(key, value)` pairs of a [`NonHashMap`].
pub struct Iter<'a, K, V> {
    inner: deque::Iter<'a, Entry<K, V>>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a NonHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for NonHashMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Index<&K> for NonHashMap<K, V>
where
    K: PartialEq + Clone + fmt::Debug,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NonHashMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the map as `{k0: v0, k1: v1}`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for NonHashMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for NonHashMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct NonHashMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for NonHashMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    type Value = NonHashMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = NonHashMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.add(key, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for NonHashMap<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(NonHashMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
