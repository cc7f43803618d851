//! Proptest strategies for skipmap property-based testing
//!
//! Reusable generators for keys, operation sequences and configs, shared by
//! the engine, set and façade property tests.

pub mod strategies;

pub use strategies::{
    strategy_config, strategy_dense_key, strategy_distinct_keys, strategy_key_range,
    strategy_key_vec, strategy_map_op, strategy_map_ops, strategy_max_level,
    strategy_probability, strategy_set_op, strategy_set_ops, strategy_wide_key,
};
