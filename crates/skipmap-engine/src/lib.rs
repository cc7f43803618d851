//! Skip list engine for skipmap.
//!
//! A [`SkipMap`] is an ordered map with O(log n) expected lookup, insertion
//! and deletion, built from a stack of linked levels instead of a balanced
//! tree. Level 0 links every node in key order; each higher level links a
//! random subset of the level below, so a search can skip ahead.
//!
//! ```text
//! level 2:  HEAD ─────────────────────► 7 ──────────────► ∅
//! level 1:  HEAD ──────► 2 ───────────► 7 ──────► 10 ──► ∅
//! level 0:  HEAD ─► 1 ─► 2 ─► 3 ─► 4 ─► 7 ─► 9 ─► 10 ──► ∅
//! ```
//!
//! Nodes live in an arena and link to each other by index. The header is the
//! list's own forward vector; its length is the current height.
//!
//! Ordering comes from a [`Comparator`], so keys need no `Ord` implementation
//! of their own. The level generator owns its random source; seed it through
//! [`SkipMapConfig`] or [`SkipMap::with_rng`] to reproduce a structure.
//!
//! The container has no internal synchronization. Wrap it in a lock to share
//! it between threads.

mod arena;
mod invariants;
mod iter;

pub use invariants::InvariantError;
pub use iter::{IntoIter, Iter, Keys, Range, Values};

use arena::{Arena, Link, Node, NodeId};
use rand::Rng;
use rand::rngs::StdRng;
use skipmap_config::{ConfigError, DEFAULT_MAX_LEVEL, SkipMapConfig};
use skipmap_level::LevelGenerator;
use skipmap_order::{ByLessThan, Comparator, LessThan, Natural, precedes};
use std::fmt;
use std::mem;

/// Map keyed by machine integers in natural order.
pub type IntMap<V> = SkipMap<i64, V>;

/// Map keyed by strings in lexicographic order.
pub type StringMap<V> = SkipMap<String, V>;

/// Where a forward link lives: the header or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Head,
    Node(NodeId),
}

/// An ordered map backed by a skip list.
///
/// # Type Parameters
///
/// - `K`: key type, ordered only through `C`
/// - `V`: value type
/// - `C`: [`Comparator`] over `K`, defaults to [`Natural`]
/// - `R`: random source for level draws, defaults to [`StdRng`]
#[derive(Clone)]
pub struct SkipMap<K, V, C = Natural, R = StdRng> {
    pub(crate) arena: Arena<K, V>,
    /// Header forward links; `head.len() - 1` is the current top level.
    pub(crate) head: Vec<Link>,
    pub(crate) len: usize,
    max_level: usize,
    pub(crate) comparator: C,
    levels: LevelGenerator<R>,
}

impl<K: Ord, V> SkipMap<K, V> {
    /// Create an empty map ordered by `K`'s `Ord` implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for SkipMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: LessThan, V> SkipMap<K, V, ByLessThan> {
    /// Create an empty map ordered by `K`'s [`LessThan`] implementation.
    pub fn ordered() -> Self {
        Self::with_comparator(ByLessThan)
    }
}

impl<K, V, C: Comparator<K>> SkipMap<K, V, C> {
    /// Create an empty map with a caller-supplied order and default settings.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_rng(comparator, DEFAULT_MAX_LEVEL, LevelGenerator::default())
    }

    /// Create an empty map from a validated config.
    ///
    /// A configured seed makes level draws, and therefore the shape of the
    /// list, reproducible.
    pub fn with_config(comparator: C, config: &SkipMapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let levels = match config.seed {
            Some(seed) => LevelGenerator::seeded(seed, config.probability),
            None => LevelGenerator::from_os_rng(config.probability),
        };
        Ok(Self::with_rng(comparator, config.max_level, levels))
    }
}

impl<K, V, C: Comparator<K>, R> SkipMap<K, V, C, R> {
    /// Create an empty map drawing levels from `levels`.
    pub fn with_rng(comparator: C, max_level: usize, levels: LevelGenerator<R>) -> Self {
        Self {
            arena: Arena::new(),
            head: vec![None],
            len: 0,
            max_level,
            comparator,
            levels,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current top level of the list (0 when empty).
    pub fn level(&self) -> usize {
        self.head.len() - 1
    }

    /// The configured level bound.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Change the level bound for future insertions.
    ///
    /// Lowering the bound never truncates existing levels; see
    /// [`effective_max_level`](Self::effective_max_level).
    pub fn set_max_level(&mut self, max_level: usize) {
        self.max_level = max_level;
    }

    /// Ceiling for newly drawn levels: the greater of the current top level
    /// and the configured bound.
    pub fn effective_max_level(&self) -> usize {
        self.level().max(self.max_level)
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let node = self.arena.get(self.locate(key, None)?);
        self.matches(node, key).then_some(&node.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.locate(key, None)?;
        let node = self.arena.get_mut(id);
        if self.comparator.less_than(key, &node.key) {
            None
        } else {
            Some(&mut node.value)
        }
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the entry with the smallest key not less than `min`.
    pub fn get_greater_or_equal(&self, min: &K) -> Option<(&K, &V)> {
        let node = self.arena.get(self.locate(min, None)?);
        Some((&node.key, &node.value))
    }

    /// Smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        let node = self.arena.get(self.head[0]?);
        Some((&node.key, &node.value))
    }

    /// Remove `key`, returning its value if it was present.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let mut path = vec![Position::Head; self.head.len()];
        let id = self.locate(key, Some(&mut path[..]))?;
        if !self.matches(self.arena.get(id), key) {
            return None;
        }

        let level = self.arena.get(id).level();
        for (l, &at) in path.iter().enumerate().take(level + 1) {
            if self.link(at, l) != Some(id) {
                break;
            }
            let next = self.arena.get(id).forward[l];
            self.set_link(at, l, next);
        }
        let node = self.arena.remove(id);
        self.trim_levels();
        self.len -= 1;
        Some(node.value)
    }

    /// Remove every entry and drop back to a single empty level.
    pub fn clear(&mut self) {
        log::debug!("clearing skip list with {} entries", self.len);
        self.arena.clear();
        self.head.clear();
        self.head.push(None);
        self.len = 0;
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            next: self.head[0],
            remaining: self.len,
        }
    }

    /// Iterate over the entries whose keys lie in `[from, to)`.
    ///
    /// Empty when `to` does not sort after `from`.
    pub fn range<'a>(&'a self, from: &K, to: &'a K) -> Range<'a, K, V, C> {
        Range {
            arena: &self.arena,
            comparator: &self.comparator,
            next: self.locate(from, None),
            to,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K, V, C: Comparator<K>, R: Rng> SkipMap<K, V, C, R> {
    /// Store `value` under `key`.
    ///
    /// An existing entry is updated in place and its previous value is
    /// returned; the structure is left untouched. Otherwise a new node is
    /// spliced in on every level up to a freshly drawn one, and `None` is
    /// returned.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let mut path = vec![Position::Head; self.head.len()];
        if let Some(id) = self.locate(&key, Some(&mut path[..])) {
            let node = self.arena.get_mut(id);
            if !self.comparator.less_than(&key, &node.key) {
                return Some(mem::replace(&mut node.value, value));
            }
        }

        let ceiling = self.effective_max_level();
        let level = self.levels.random_level(ceiling);
        if level > self.level() {
            log::trace!("skip list grows from level {} to {}", self.level(), level);
            // New levels start empty, so the header precedes the new node.
            self.head.resize(level + 1, None);
            path.resize(level + 1, Position::Head);
        }

        let forward = (0..=level).map(|l| self.link(path[l], l)).collect();
        let id = self.arena.insert(Node {
            key,
            value,
            forward,
        });
        for (l, &at) in path.iter().enumerate().take(level + 1) {
            self.set_link(at, l, Some(id));
        }
        self.len += 1;
        None
    }
}

impl<K, V, C: Comparator<K>, R> SkipMap<K, V, C, R> {
    /// Walk from the top level down to 0, recording in `path` the last node
    /// before `key` on each level. Returns the candidate: the first node not
    /// less than `key`.
    fn locate(&self, key: &K, mut path: Option<&mut [Position]>) -> Link {
        let mut current = Position::Head;
        for level in (0..self.head.len()).rev() {
            let mut next = self.link(current, level);
            while precedes(&self.comparator, self.key_of(next), key) {
                if let Some(id) = next {
                    current = Position::Node(id);
                }
                next = self.link(current, level);
            }
            if let Some(path) = path.as_deref_mut() {
                path[level] = current;
            }
        }
        self.link(current, 0)
    }

    /// A candidate matches when the key does not sort before it.
    fn matches(&self, candidate: &Node<K, V>, key: &K) -> bool {
        !self.comparator.less_than(key, &candidate.key)
    }

    fn key_of(&self, link: Link) -> Option<&K> {
        link.map(|id| &self.arena.get(id).key)
    }

    fn link(&self, at: Position, level: usize) -> Link {
        match at {
            Position::Head => self.head[level],
            Position::Node(id) => self.arena.get(id).forward[level],
        }
    }

    fn set_link(&mut self, at: Position, level: usize, link: Link) {
        match at {
            Position::Head => self.head[level] = link,
            Position::Node(id) => self.arena.get_mut(id).forward[level] = link,
        }
    }

    /// Drop empty levels from the top of the header, keeping level 0.
    fn trim_levels(&mut self) {
        while self.head.len() > 1 && self.head.last() == Some(&None) {
            self.head.pop();
            log::trace!("skip list trimmed to level {}", self.head.len() - 1);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: Comparator<K>, R> fmt::Debug for SkipMap<K, V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C: Comparator<K>, R> IntoIterator for &'a SkipMap<K, V, C, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C, R> IntoIterator for SkipMap<K, V, C, R> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            next: self.head[0],
            arena: self.arena,
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>, R: Rng> Extend<(K, V)> for SkipMap<K, V, C, R> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use skipmap_level::Probability;
    use skipmap_order::Reversed;

    /// Every draw is 0.0, so every node is promoted up to the ceiling.
    struct TallestRng;

    impl RngCore for TallestRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn seeded<K: Ord, V>(seed: u64) -> SkipMap<K, V> {
        let config = SkipMapConfig::new().with_seed(seed);
        SkipMap::with_config(Natural, &config).unwrap()
    }

    fn keys<K: Clone, V, C: Comparator<K>, R>(map: &SkipMap<K, V, C, R>) -> Vec<K> {
        map.keys().cloned().collect()
    }

    #[test]
    fn new_is_empty() {
        let map: SkipMap<i32, i32> = SkipMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.level(), 0);
        assert_eq!(map.max_level(), DEFAULT_MAX_LEVEL);
        assert_eq!(map.get(&1), None);
        assert_eq!(map.iter().next(), None);
    }

    #[test]
    fn set_then_get() {
        let mut map = SkipMap::new();
        assert_eq!(map.set(0, 0), None);
        assert_eq!(map.set(1, 1), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&0), Some(&0));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut map = seeded(1);
        map.set("k", 1);
        let level = map.level();
        assert_eq!(map.set("k", 2), Some(1));
        assert_eq!(map.get(&"k"), Some(&2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.level(), level);
    }

    #[test]
    fn get_missing_between_keys() {
        let map: SkipMap<i32, i32> = (0..10).map(|k| (k * 2, k)).collect();
        assert_eq!(map.get(&3), None);
        assert_eq!(map.get(&-1), None);
        assert_eq!(map.get(&100), None);
        assert!(map.contains_key(&4));
        assert!(!map.contains_key(&5));
    }

    #[test]
    fn get_mut_modifies_value() {
        let mut map = SkipMap::new();
        map.set(3, String::from("a"));
        map.get_mut(&3).unwrap().push('b');
        assert_eq!(map.get(&3).map(String::as_str), Some("ab"));
        assert!(map.get_mut(&4).is_none());
    }

    #[test]
    fn delete_returns_value() {
        let mut map = SkipMap::new();
        map.set(5, "five");
        map.set(6, "six");
        assert_eq!(map.delete(&5), Some("five"));
        assert_eq!(map.get(&5), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.delete(&5), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn delete_from_empty() {
        let mut map: SkipMap<i32, i32> = SkipMap::new();
        assert_eq!(map.delete(&1), None);
        assert!(map.is_empty());
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn iteration_is_sorted() {
        let mut map = seeded(7);
        for k in [4, 1, 2, 9, 10, 7, 3] {
            map.set(k, k);
        }
        assert_eq!(keys(&map), vec![1, 2, 3, 4, 7, 9, 10]);
        assert_eq!(map.iter().len(), 7);
    }

    #[test]
    fn iterator_has_next() {
        let map: SkipMap<i32, ()> = [(1, ()), (2, ())].into_iter().collect();
        let mut iter = map.iter();
        assert!(iter.has_next());
        iter.next();
        assert!(iter.has_next());
        iter.next();
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn range_is_half_open() {
        let map: SkipMap<i32, i32> = (0..20).map(|k| (k, k)).collect();
        let found: Vec<i32> = map.range(&5, &10).map(|(k, _)| *k).collect();
        assert_eq!(found, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn range_starts_at_first_greater_or_equal() {
        let map: SkipMap<i32, i32> = (0..10).map(|k| (k * 10, k)).collect();
        let found: Vec<i32> = map.range(&15, &45).map(|(k, _)| *k).collect();
        assert_eq!(found, vec![20, 30, 40]);
    }

    #[test]
    fn range_edge_cases() {
        let map: SkipMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
        assert_eq!(map.range(&5, &5).count(), 0);
        assert_eq!(map.range(&7, &3).count(), 0);
        assert_eq!(map.range(&20, &30).count(), 0);
        assert_eq!(map.range(&-5, &100).count(), 10);
    }

    #[test]
    fn range_has_next_respects_bound() {
        let map: SkipMap<i32, i32> = (0..5).map(|k| (k, k)).collect();
        let mut range = map.range(&1, &3);
        assert!(range.has_next());
        assert_eq!(range.next(), Some((&1, &1)));
        assert_eq!(range.next(), Some((&2, &2)));
        assert!(!range.has_next());
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn greater_or_equal_lookup() {
        let map: SkipMap<i32, &str> = [(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
        assert_eq!(map.get_greater_or_equal(&20), Some((&20, &"b")));
        assert_eq!(map.get_greater_or_equal(&21), Some((&30, &"c")));
        assert_eq!(map.get_greater_or_equal(&i32::MIN), Some((&10, &"a")));
        assert_eq!(map.get_greater_or_equal(&31), None);
    }

    #[test]
    fn first_entry() {
        let mut map = SkipMap::new();
        assert_eq!(map.first(), None);
        map.set(2, 'b');
        map.set(1, 'a');
        assert_eq!(map.first(), Some((&1, &'a')));
    }

    #[test]
    fn header_grows_and_trims() {
        let mut map = SkipMap::with_rng(Natural, 4, LevelGenerator::new(TallestRng, Probability::QUARTER));
        map.set(1, 1);
        assert_eq!(map.level(), 4);
        map.set(2, 2);
        assert_eq!(map.level(), 4);
        map.delete(&1);
        assert_eq!(map.level(), 4);
        map.delete(&2);
        assert_eq!(map.level(), 0);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn trim_stops_at_populated_level() {
        let mut map = SkipMap::with_rng(Natural, 2, LevelGenerator::new(TallestRng, Probability::QUARTER));
        map.set(1, 1);
        map.set_max_level(0);
        // The ceiling stays at the current height while it is populated.
        map.set(2, 2);
        assert_eq!(map.level(), 2);
        map.delete(&1);
        assert_eq!(map.level(), 2);
        map.delete(&2);
        assert_eq!(map.level(), 0);
    }

    #[test]
    fn lowering_max_level_keeps_structure() {
        let mut map = SkipMap::with_rng(Natural, 6, LevelGenerator::new(TallestRng, Probability::QUARTER));
        map.set(1, 1);
        map.set_max_level(1);
        assert_eq!(map.max_level(), 1);
        assert_eq!(map.level(), 6);
        assert_eq!(map.effective_max_level(), 6);
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn raising_max_level_lifts_ceiling() {
        let mut map = SkipMap::with_rng(Natural, 1, LevelGenerator::new(TallestRng, Probability::QUARTER));
        map.set(1, 1);
        assert_eq!(map.level(), 1);
        map.set_max_level(3);
        map.set(2, 2);
        assert_eq!(map.level(), 3);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn zero_max_level_is_a_linked_list() {
        let config = SkipMapConfig::new().with_max_level(0).with_seed(9);
        let mut map = SkipMap::with_config(Natural, &config).unwrap();
        for k in (0..100).rev() {
            map.set(k, k);
        }
        assert_eq!(map.level(), 0);
        assert_eq!(map.len(), 100);
        assert_eq!(keys(&map), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn with_config_rejects_invalid() {
        let config = SkipMapConfig::new().with_max_level(1000);
        let result: Result<SkipMap<i32, i32>, _> = SkipMap::with_config(Natural, &config);
        assert!(matches!(result, Err(ConfigError::MaxLevelTooLarge { .. })));
    }

    #[test]
    fn same_seed_same_shape() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        let mut heights = (Vec::new(), Vec::new());
        for k in 0..500 {
            a.set(k, ());
            b.set(k, ());
            heights.0.push(a.level());
            heights.1.push(b.level());
        }
        assert_eq!(heights.0, heights.1);
    }

    #[test]
    fn height_stays_logarithmic() {
        let mut map = seeded(5);
        for k in 0..10_000 {
            map.set(k, ());
        }
        // log4(10_000) is about 6.6.
        assert!(map.level() <= 16, "level was {}", map.level());
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn reversed_comparator_iterates_descending() {
        let mut map = SkipMap::with_comparator(Reversed(Natural));
        for k in [3, 1, 4, 1, 5, 9, 2, 6] {
            map.set(k, ());
        }
        assert_eq!(keys(&map), vec![9, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn closure_comparator_on_floats() {
        let mut map = SkipMap::with_comparator(|l: &f64, r: &f64| l.total_cmp(r).is_lt());
        for k in [2.5, -1.0, 0.0, 10.25] {
            map.set(k, ());
        }
        assert_eq!(keys(&map), vec![-1.0, 0.0, 2.5, 10.25]);
        assert!(map.contains_key(&0.0));
    }

    #[test]
    fn comparator_equality_not_identity() {
        // Case-insensitive keys: "B" and "b" are the same key.
        let mut map =
            SkipMap::with_comparator(|l: &String, r: &String| l.to_lowercase() < r.to_lowercase());
        map.set("b".to_string(), 1);
        assert_eq!(map.set("B".to_string(), 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"B".to_string()), Some(&2));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Priority(u8);

    impl LessThan for Priority {
        fn less_than(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    #[test]
    fn ordered_map_uses_less_than() {
        let mut map = SkipMap::ordered();
        map.set(Priority(3), "low");
        map.set(Priority(1), "high");
        assert_eq!(keys(&map), vec![Priority(1), Priority(3)]);
        assert_eq!(map.get(&Priority(3)), Some(&"low"));
    }

    #[test]
    fn string_map_alias() {
        let mut map: StringMap<u32> = StringMap::new();
        map.set("pear".into(), 3);
        map.set("apple".into(), 1);
        assert_eq!(keys(&map), vec!["apple".to_string(), "pear".to_string()]);
    }

    #[test]
    fn int_map_alias() {
        let mut map: IntMap<&str> = IntMap::new();
        map.set(-5, "neg");
        map.set(5, "pos");
        assert_eq!(map.first(), Some((&-5, &"neg")));
    }

    #[test]
    fn clear_resets_everything() {
        let mut map: SkipMap<i32, i32> = (0..100).map(|k| (k, k)).collect();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.level(), 0);
        assert_eq!(map.iter().count(), 0);
        map.set(1, 1);
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn deleted_slots_are_reused() {
        let mut map = seeded(3);
        for k in 0..10 {
            map.set(k, k);
        }
        for k in 0..5 {
            map.delete(&k);
        }
        for k in 10..15 {
            map.set(k, k);
        }
        assert_eq!(map.arena.len(), 10);
        assert_eq!(keys(&map), (5..15).collect::<Vec<_>>());
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[test]
    fn owned_iteration() {
        let map: SkipMap<i32, String> = [(2, "b".to_string()), (1, "a".to_string())]
            .into_iter()
            .collect();
        let entries: Vec<(i32, String)> = map.into_iter().collect();
        assert_eq!(entries, vec![(1, "a".to_string()), (2, "b".to_string())]);
    }

    #[test]
    fn values_follow_key_order() {
        let map: SkipMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(map.values().collect::<String>(), "abc");
    }

    #[test]
    fn borrowed_into_iterator() {
        let map: SkipMap<i32, i32> = (0..3).map(|k| (k, k * k)).collect();
        let mut sum = 0;
        for (_, v) in &map {
            sum += v;
        }
        assert_eq!(sum, 5);
    }

    #[test]
    fn debug_renders_as_map() {
        let map: SkipMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
        insta::assert_snapshot!(format!("{map:?}"), @r#"{1: "one", 2: "two"}"#);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: SkipMap<i32, i32> = (0..5).map(|k| (k, k)).collect();
        let b = a.clone();
        a.delete(&0);
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 5);
        assert_eq!(b.get(&0), Some(&0));
    }
}
