//! Copy-on-write containers backing [`Value`].
//!
//! [`Sequence`] is a thin wrapper around `im::Vector`; [`Mapping`] keeps an
//! insertion-ordered `IndexMap` behind an `Arc`. Cloning either is O(1) and
//! shares every child with the original. A write through a clone duplicates
//! only the level being written, so untouched branches stay shared.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

/// Ordered, index-addressed container with structural sharing.
#[derive(Clone, Default)]
pub struct Sequence(im::Vector<Value>);

impl Sequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns a mutable slot at `index`, growing the sequence if needed.
    ///
    /// Slots between the old end and `index` are filled with
    /// [`Value::Undefined`].
    pub fn slot(&mut self, index: usize) -> &mut Value {
        while self.0.len() <= index {
            self.0.push_back(Value::Undefined);
        }
        &mut self.0[index]
    }

    /// Appends an element.
    pub fn push_back(&mut self, value: Value) {
        self.0.push_back(value);
    }

    /// Prepends an element.
    pub fn push_front(&mut self, value: Value) {
        self.0.push_front(value);
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<Value> {
        self.0.pop_front()
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<Value> {
        self.0.pop_back()
    }

    /// Moves every element of `other` to the end of this sequence.
    pub fn append(&mut self, other: Self) {
        self.0.append(other.0);
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.0.back()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns a new sequence ordered by `compare`.
    ///
    /// The sort is stable: equal elements keep their relative order.
    #[must_use]
    pub fn sorted_by(&self, mut compare: impl FnMut(&Value, &Value) -> Ordering) -> Self {
        let mut items: Vec<Value> = self.iter().cloned().collect();
        items.sort_by(|a, b| compare(a, b));
        items.into_iter().collect()
    }

    /// Returns true if both sequences point at the same storage.
    ///
    /// Can return `false` for small sequences that `im` keeps inline.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl Extend<Value> for Sequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Insertion-ordered keyed container with copy-on-write storage.
///
/// Re-inserting an existing key replaces its value in place; the key keeps
/// its original position. Equality ignores entry order.
#[derive(Clone, Default)]
pub struct Mapping(Arc<IndexMap<Arc<str>, Value>>);

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(IndexMap::new()))
    }

    /// Returns a mapping with the same entries in freshly allocated storage.
    ///
    /// Values are shared with `self`; only the top level is duplicated.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self(Arc::new(IndexMap::clone(&self.0)))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the mapping contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: Value) -> Option<Value> {
        Arc::make_mut(&mut self.0).insert(key.into(), value)
    }

    /// Removes an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        Arc::make_mut(&mut self.0).shift_remove(key)
    }

    /// Returns a mutable slot for `key`, inserting [`Value::Undefined`] if absent.
    pub fn slot(&mut self, key: &str) -> &mut Value {
        let entries = Arc::make_mut(&mut self.0);
        let index = match entries.get_index_of(key) {
            Some(index) => index,
            None => entries.insert_full(Arc::from(key), Value::Undefined).0,
        };
        &mut entries[index]
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Arc<str>, Value> {
        self.0.iter()
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Arc<str>, Value> {
        self.0.keys()
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Arc<str>, Value> {
        self.0.values()
    }

    /// Returns a new mapping whose entries are reordered by `compare`.
    ///
    /// Key/value pairs are unchanged; the sort is stable.
    #[must_use]
    pub fn sorted_by(
        &self,
        mut compare: impl FnMut((&Arc<str>, &Value), (&Arc<str>, &Value)) -> Ordering,
    ) -> Self {
        let mut entries: Vec<(Arc<str>, Value)> = self
            .iter()
            .map(|(key, value)| (Arc::clone(key), value.clone()))
            .collect();
        entries.sort_by(|(k1, v1), (k2, v2)| compare((k1, v1), (k2, v2)));
        entries.into_iter().collect()
    }

    /// Returns true if both mappings point at the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl<K: Into<Arc<str>>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        ))
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Arc<str>, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Arc<str>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
