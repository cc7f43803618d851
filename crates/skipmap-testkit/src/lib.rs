//! Shared fixtures for skipmap tests.
//!
//! Reference models, proptest strategies, deterministic level generators and
//! Given/When/Then helpers. Keeping these in a microcrate avoids copy-paste
//! across the engine, set and fuzz tests.

pub mod bdd;
pub mod model;
pub mod proptest;
pub mod rng;


use skipmap_config::SkipMapConfig;
use skipmap_engine::SkipMap;
use skipmap_order::Natural;
use skipmap_set::SkipSet;

/// Map with a fixed seed, so its shape is the same on every run.
pub fn seeded_map<K: Ord, V>(seed: u64) -> SkipMap<K, V> {
    let config = SkipMapConfig::new().with_seed(seed);
    match SkipMap::with_config(Natural, &config) {
        Ok(map) => map,
        Err(err) => panic!("default config with a seed is valid: {err}"),
    }
}

/// Set with a fixed seed.
pub fn seeded_set<K: Ord>(seed: u64) -> SkipSet<K> {
    let config = SkipMapConfig::new().with_seed(seed);
    match SkipSet::with_config(Natural, &config) {
        Ok(set) => set,
        Err(err) => panic!("default config with a seed is valid: {err}"),
    }
}

/// Map holding `key -> key` for every key, in insertion order.
pub fn identity_map(seed: u64, keys: impl IntoIterator<Item = i64>) -> SkipMap<i64, i64> {
    let mut map = seeded_map(seed);
    for key in keys {
        map.set(key, key);
    }
    map
}

/// The keys of `map` in iteration order.
pub fn keys_of<K: Ord + Clone, V>(map: &SkipMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}
