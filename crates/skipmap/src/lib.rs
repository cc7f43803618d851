//! Probabilistic ordered map and set built on a skip list.
//!
//! [`SkipMap`] keeps its entries sorted by a caller-supplied [`Comparator`]
//! and offers O(log n) expected lookup, insertion and deletion, plus ordered
//! and half-open range iteration. [`SkipSet`] is the same structure with no
//! values.
//!
//! ```
//! use skipmap::SkipMap;
//!
//! let mut map = SkipMap::new();
//! for k in [4, 1, 2, 9, 10, 7, 3] {
//!     map.set(k, k * 10);
//! }
//! assert_eq!(map.get(&9), Some(&90));
//! assert_eq!(map.set(9, 91), Some(90));
//!
//! let keys: Vec<i32> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 2, 3, 4, 7, 9, 10]);
//!
//! let window: Vec<i32> = map.range(&3, &9).map(|(k, _)| *k).collect();
//! assert_eq!(window, [3, 4, 7]);
//! ```
//!
//! Keys without an `Ord` implementation are ordered by a closure, a
//! [`LessThan`] implementation or any other [`Comparator`]:
//!
//! ```
//! use skipmap::SkipSet;
//!
//! let mut set = SkipSet::with_comparator(|a: &f64, b: &f64| a.total_cmp(b).is_lt());
//! set.add(2.5);
//! set.add(-1.0);
//! assert_eq!(set.first(), Some(&-1.0));
//! ```
//!
//! Settings come from a [`SkipMapConfig`], either built in code or read from
//! a JSON or YAML file with [`load_config`]. A seeded config reproduces the
//! same list shape on every run.

pub use skipmap_config::{
    ConfigError, ConfigFormat, DEFAULT_MAX_LEVEL, MAX_SUPPORTED_LEVEL, SkipMapConfig, load_config,
    parse_config, save_config,
};
pub use skipmap_engine::{IntMap, InvariantError, SkipMap, StringMap};
pub use skipmap_level::{DEFAULT_PROBABILITY, LevelGenerator, Probability, ProbabilityError};
pub use skipmap_order::{ByLessThan, Comparator, LessThan, Natural, Reversed};
pub use skipmap_set::{IntSet, SkipSet, StringSet};

/// Cursor and iterator types.
pub mod iter {
    pub use skipmap_engine::{IntoIter, Iter, Keys, Range, Values};

    /// Set iterators.
    pub mod set {
        pub use skipmap_set::{IntoIter, Iter, Range};
    }
}

use std::path::Path;

/// Build an empty map with natural key order from a config file.
pub fn map_from_file<K: Ord, V>(path: impl AsRef<Path>) -> anyhow::Result<SkipMap<K, V>> {
    let config = load_config(path)?;
    Ok(SkipMap::with_config(Natural, &config)?)
}

/// Build an empty set with natural key order from a config file.
pub fn set_from_file<K: Ord>(path: impl AsRef<Path>) -> anyhow::Result<SkipSet<K>> {
    let config = load_config(path)?;
    Ok(SkipSet::with_config(Natural, &config)?)
}
