//! Ordered set built on the skipmap engine.
//!
//! A [`SkipSet`] is a [`SkipMap`] whose values are `()`. Membership, removal
//! and ordered traversal all delegate to the map.

use rand::Rng;
use rand::rngs::StdRng;
use skipmap_config::{ConfigError, SkipMapConfig};
use skipmap_engine::{InvariantError, SkipMap};
use skipmap_level::LevelGenerator;
use skipmap_order::{ByLessThan, Comparator, LessThan, Natural};
use std::fmt;
use std::iter::FusedIterator;

/// Set of machine integers in natural order.
pub type IntSet = SkipSet<i64>;

/// Set of strings in lexicographic order.
pub type StringSet = SkipSet<String>;

/// An ordered set backed by a skip list.
#[derive(Clone)]
pub struct SkipSet<K, C = Natural, R = StdRng> {
    map: SkipMap<K, (), C, R>,
}

impl<K: Ord> SkipSet<K> {
    pub fn new() -> Self {
        Self { map: SkipMap::new() }
    }
}

impl<K: Ord> Default for SkipSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: LessThan> SkipSet<K, ByLessThan> {
    /// Create an empty set ordered by `K`'s [`LessThan`] implementation.
    pub fn ordered() -> Self {
        Self {
            map: SkipMap::ordered(),
        }
    }
}

impl<K, C: Comparator<K>> SkipSet<K, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            map: SkipMap::with_comparator(comparator),
        }
    }

    pub fn with_config(comparator: C, config: &SkipMapConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            map: SkipMap::with_config(comparator, config)?,
        })
    }
}

impl<K, C: Comparator<K>, R> SkipSet<K, C, R> {
    pub fn with_rng(comparator: C, max_level: usize, levels: LevelGenerator<R>) -> Self {
        Self {
            map: SkipMap::with_rng(comparator, max_level, levels),
        }
    }

    /// Returns `true` if `key` is a member.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Remove `key`. Returns `true` if it was a member.
    pub fn remove(&mut self, key: &K) -> bool {
        self.map.delete(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Smallest member not less than `min`.
    pub fn get_greater_or_equal(&self, min: &K) -> Option<&K> {
        self.map.get_greater_or_equal(min).map(|(k, _)| k)
    }

    pub fn first(&self) -> Option<&K> {
        self.map.first().map(|(k, _)| k)
    }

    /// Members in order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.map.keys())
    }

    /// Members in `[from, to)`.
    pub fn range<'a>(&'a self, from: &K, to: &'a K) -> Range<'a, K, C> {
        Range(self.map.range(from, to))
    }

    pub fn level(&self) -> usize {
        self.map.level()
    }

    pub fn max_level(&self) -> usize {
        self.map.max_level()
    }

    pub fn set_max_level(&mut self, max_level: usize) {
        self.map.set_max_level(max_level);
    }

    pub fn effective_max_level(&self) -> usize {
        self.map.effective_max_level()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.map.check_invariants()
    }
}

impl<K, C: Comparator<K>, R: Rng> SkipSet<K, C, R> {
    /// Add `key`. Returns `true` if it was not already a member.
    ///
    /// Re-adding an existing member keeps the stored key.
    pub fn add(&mut self, key: K) -> bool {
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.set(key, ()).is_none()
    }
}

impl<K: fmt::Debug, C: Comparator<K>, R> fmt::Debug for SkipSet<K, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for SkipSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, C: Comparator<K>, R: Rng> Extend<K> for SkipSet<K, C, R> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a, K, C: Comparator<K>, R> IntoIterator for &'a SkipSet<K, C, R> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C, R> IntoIterator for SkipSet<K, C, R> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.map.into_iter())
    }
}

/// Iterator over members in order.
#[derive(Clone)]
pub struct Iter<'a, K>(skipmap_engine::Keys<'a, K, ()>);

impl<K> Iter<'_, K> {
    pub fn has_next(&self) -> bool {
        self.0.has_next()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// Iterator over the members in `[from, to)`.
#[derive(Clone)]
pub struct Range<'a, K, C>(skipmap_engine::Range<'a, K, (), C>);

impl<K, C: Comparator<K>> Range<'_, K, C> {
    pub fn has_next(&self) -> bool {
        self.0.has_next()
    }
}

impl<'a, K, C: Comparator<K>> Iterator for Range<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

impl<K, C: Comparator<K>> FusedIterator for Range<'_, K, C> {}

/// Owning iterator over members in order.
pub struct IntoIter<K>(skipmap_engine::IntoIter<K, ()>);

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
