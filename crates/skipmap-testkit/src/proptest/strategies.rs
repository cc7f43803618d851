//! Proptest strategies for skipmap property-based testing
//!
//! Dense keys are drawn from a narrow band so that generated sequences hit
//! the same keys repeatedly (overwrites, deletes of present keys); wide keys
//! cover the full `i64` range.

use crate::model::{MapOp, SetOp};
use proptest::prelude::*;
use skipmap_config::{MAX_SUPPORTED_LEVEL, SkipMapConfig};
use skipmap_level::Probability;
use std::collections::BTreeSet;

// ============================================================================
// Key Strategies
// ============================================================================

/// Strategy for keys that collide often
pub fn strategy_dense_key() -> impl Strategy<Value = i64> {
    -64i64..64
}

/// Strategy for keys anywhere in the `i64` range
pub fn strategy_wide_key() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Strategy for a key vector that may contain duplicates
pub fn strategy_key_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(prop_oneof![strategy_dense_key(), strategy_wide_key()], 0..max_len)
}

/// Strategy for a set of distinct keys
pub fn strategy_distinct_keys(max_len: usize) -> impl Strategy<Value = BTreeSet<i64>> {
    prop::collection::btree_set(strategy_wide_key(), 0..max_len)
}

/// Strategy for a `(from, to)` pair, not necessarily ordered
pub fn strategy_key_range() -> impl Strategy<Value = (i64, i64)> {
    (strategy_dense_key(), strategy_dense_key())
}

// ============================================================================
// Config Strategies
// ============================================================================

/// Strategy for valid level bounds, weighted toward small values
pub fn strategy_max_level() -> impl Strategy<Value = usize> {
    prop_oneof![
        3 => 0usize..8,
        1 => 8usize..=MAX_SUPPORTED_LEVEL,
    ]
}

/// Strategy for valid promotion probabilities
pub fn strategy_probability() -> impl Strategy<Value = Probability> {
    prop_oneof![
        Just(Probability::QUARTER),
        Just(Probability::HALF),
        (0.01f64..0.99).prop_filter_map("probability out of range", |p| Probability::new(p).ok()),
    ]
}

/// Strategy for seeded, valid configs
pub fn strategy_config() -> impl Strategy<Value = SkipMapConfig> {
    (strategy_max_level(), strategy_probability(), any::<u64>()).prop_map(
        |(max_level, probability, seed)| {
            SkipMapConfig::new()
                .with_max_level(max_level)
                .with_probability(probability)
                .with_seed(seed)
        },
    )
}

// ============================================================================
// Operation Strategies
// ============================================================================

/// Strategy for a single map operation
pub fn strategy_map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (strategy_dense_key(), any::<i64>()).prop_map(|(k, v)| MapOp::Set(k, v)),
        3 => strategy_dense_key().prop_map(MapOp::Delete),
        2 => strategy_dense_key().prop_map(MapOp::Get),
        1 => strategy_dense_key().prop_map(MapOp::GreaterOrEqual),
        1 => strategy_key_range().prop_map(|(from, to)| MapOp::Range(from, to)),
        1 => (0usize..6).prop_map(MapOp::SetMaxLevel),
        1 => Just(MapOp::Clear),
    ]
}

/// Strategy for a sequence of map operations
pub fn strategy_map_ops(max_len: usize) -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(strategy_map_op(), 0..max_len)
}

/// Strategy for a single set operation
pub fn strategy_set_op() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        4 => strategy_dense_key().prop_map(SetOp::Add),
        2 => strategy_dense_key().prop_map(SetOp::Remove),
        2 => strategy_dense_key().prop_map(SetOp::Contains),
        1 => strategy_key_range().prop_map(|(from, to)| SetOp::Range(from, to)),
    ]
}

/// Strategy for a sequence of set operations
pub fn strategy_set_ops(max_len: usize) -> impl Strategy<Value = Vec<SetOp>> {
    prop::collection::vec(strategy_set_op(), 0..max_len)
}
