//! Fuzz harness for map operations
//!
//! Decodes the input into a sequence of map operations, replays it against
//! a SkipMap and a BTreeMap, and panics on any disagreement or broken
//! structural invariant.

#![no_main]

use libfuzzer_sys::fuzz_target;
use skipmap_engine::SkipMap;
use skipmap_level::{LevelGenerator, Probability};
use skipmap_order::Natural;
use skipmap_testkit::model::{MapOp, replay_map};

fn decode(data: &[u8]) -> Vec<MapOp> {
    data.chunks_exact(3)
        .map(|chunk| {
            // Narrow keys so operations collide.
            let key = i64::from(chunk[1] as i8 / 4);
            let arg = i64::from(chunk[2] as i8);
            match chunk[0] % 16 {
                0..=5 => MapOp::Set(key, arg),
                6..=9 => MapOp::Delete(key),
                10..=11 => MapOp::Get(key),
                12 => MapOp::GreaterOrEqual(key),
                13 => MapOp::Range(key, arg / 4),
                14 => MapOp::SetMaxLevel(usize::from(chunk[2] % 8)),
                _ => MapOp::Clear,
            }
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, ops)) = data.split_first() else {
        return;
    };
    let levels = LevelGenerator::seeded(u64::from(seed), Probability::HALF);
    let mut map = SkipMap::with_rng(Natural, 4, levels);
    if let Err(divergence) = replay_map(&mut map, &decode(ops)) {
        panic!("{divergence}");
    }
});
