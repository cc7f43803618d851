//! Ordered cursors over a [`SkipMap`](crate::SkipMap).
//!
//! Every cursor walks level 0 only. Cursors borrow the map, so the map
//! cannot be mutated while one is alive.

use crate::arena::{Arena, Link};
use skipmap_order::Comparator;
use std::fmt;
use std::iter::FusedIterator;

/// Forward iterator over all entries in key order.
pub struct Iter<'a, K, V> {
    pub(crate) arena: &'a Arena<K, V>,
    pub(crate) next: Link,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Returns `true` if another entry follows.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.next();
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Forward iterator over the entries whose keys lie in `[from, to)`.
pub struct Range<'a, K, V, C> {
    pub(crate) arena: &'a Arena<K, V>,
    pub(crate) comparator: &'a C,
    pub(crate) next: Link,
    pub(crate) to: &'a K,
}

impl<'a, K, V, C: Comparator<K>> Range<'a, K, V, C> {
    /// Returns `true` if another entry below the upper bound follows.
    pub fn has_next(&self) -> bool {
        match self.next {
            Some(id) => self.comparator.less_than(&self.arena.get(id).key, self.to),
            None => false,
        }
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for Range<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        if !self.comparator.less_than(&node.key, self.to) {
            self.next = None;
            return None;
        }
        self.next = node.next();
        Some((&node.key, &node.value))
    }
}

impl<K, V, C: Comparator<K>> FusedIterator for Range<'_, K, V, C> {}

impl<K, V, C> Clone for Range<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            comparator: self.comparator,
            next: self.next,
            to: self.to,
        }
    }
}

/// Iterator over keys in order.
#[derive(Clone)]
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Keys<'a, K, V> {
    pub fn has_next(&self) -> bool {
        self.0.has_next()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over values in key order.
#[derive(Clone)]
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator; yields entries in key order and frees each node as it
/// goes.
pub struct IntoIter<K, V> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) next: Link,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.remove(self.next?);
        self.next = node.next();
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.arena.len(), Some(self.arena.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
