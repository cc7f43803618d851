//! Reference models for differential testing.
//!
//! Each operation is applied to a skip list and to the matching
//! `std::collections` container; any disagreement, or any broken structural
//! invariant, is reported as an error message.

use itertools::Itertools;
use rand::Rng;
use skipmap_engine::SkipMap;
use skipmap_order::Natural;
use skipmap_set::SkipSet;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// One step against a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOp {
    Set(i64, i64),
    Delete(i64),
    Get(i64),
    GreaterOrEqual(i64),
    Range(i64, i64),
    SetMaxLevel(usize),
    Clear,
}

/// One step against a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOp {
    Add(i64),
    Remove(i64),
    Contains(i64),
    Range(i64, i64),
}

fn check<T: PartialEq + Debug>(actual: T, expected: T, what: &str) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{what}: expected {expected:?}, got {actual:?}"))
    }
}

/// `true` if every key sorts strictly after the one before it.
pub fn strictly_increasing<'a, K: Ord + 'a>(keys: impl IntoIterator<Item = &'a K>) -> bool {
    keys.into_iter().tuple_windows().all(|(a, b)| a < b)
}

/// Keys of `model` in `[from, to)`. Empty when the bounds are inverted.
fn model_range<V>(model: &BTreeMap<i64, V>, from: i64, to: i64) -> Vec<i64> {
    if from >= to {
        return Vec::new();
    }
    model.range(from..to).map(|(k, _)| *k).collect()
}

/// Apply `op` to both `map` and `model`, comparing every observable result.
pub fn apply_map_op<R: Rng>(
    map: &mut SkipMap<i64, i64, Natural, R>,
    model: &mut BTreeMap<i64, i64>,
    op: &MapOp,
) -> Result<(), String> {
    match *op {
        MapOp::Set(k, v) => check(map.set(k, v), model.insert(k, v), "set")?,
        MapOp::Delete(k) => check(map.delete(&k), model.remove(&k), "delete")?,
        MapOp::Get(k) => check(map.get(&k), model.get(&k), "get")?,
        MapOp::GreaterOrEqual(k) => check(
            map.get_greater_or_equal(&k),
            model.range(k..).next(),
            "get_greater_or_equal",
        )?,
        MapOp::Range(from, to) => {
            let found: Vec<i64> = map.range(&from, &to).map(|(k, _)| *k).collect();
            check(found, model_range(model, from, to), "range")?;
        }
        MapOp::SetMaxLevel(level) => map.set_max_level(level),
        MapOp::Clear => {
            map.clear();
            model.clear();
        }
    }
    check(map.len(), model.len(), "len")?;
    map.check_invariants().map_err(|err| format!("after {op:?}: {err}"))
}

/// Run `ops` against a fresh model and compare full contents at the end.
pub fn replay_map<R: Rng>(
    map: &mut SkipMap<i64, i64, Natural, R>,
    ops: &[MapOp],
) -> Result<(), String> {
    let mut model = BTreeMap::new();
    for op in ops {
        apply_map_op(map, &mut model, op)?;
    }
    let entries: Vec<(i64, i64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(i64, i64)> = model.into_iter().collect();
    check(entries, expected, "contents")
}

pub fn apply_set_op<R: Rng>(
    set: &mut SkipSet<i64, Natural, R>,
    model: &mut BTreeSet<i64>,
    op: &SetOp,
) -> Result<(), String> {
    match *op {
        SetOp::Add(k) => check(set.add(k), model.insert(k), "add")?,
        SetOp::Remove(k) => check(set.remove(&k), model.remove(&k), "remove")?,
        SetOp::Contains(k) => check(set.contains(&k), model.contains(&k), "contains")?,
        SetOp::Range(from, to) => {
            let found: Vec<i64> = set.range(&from, &to).copied().collect();
            let expected: Vec<i64> = if from >= to {
                Vec::new()
            } else {
                model.range(from..to).copied().collect()
            };
            check(found, expected, "range")?;
        }
    }
    check(set.len(), model.len(), "len")?;
    set.check_invariants().map_err(|err| format!("after {op:?}: {err}"))
}

pub fn replay_set<R: Rng>(set: &mut SkipSet<i64, Natural, R>, ops: &[SetOp]) -> Result<(), String> {
    let mut model = BTreeSet::new();
    for op in ops {
        apply_set_op(set, &mut model, op)?;
    }
    check(
        set.iter().copied().collect::<Vec<_>>(),
        model.into_iter().collect::<Vec<_>>(),
        "contents",
    )
}
