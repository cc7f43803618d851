//! Fuzz harness for set operations
//!
//! Replays decoded add/remove/contains/range steps against a SkipSet and a
//! BTreeSet.

#![no_main]

use libfuzzer_sys::fuzz_target;
use skipmap_set::SkipSet;
use skipmap_level::{LevelGenerator, Probability};
use skipmap_order::Natural;
use skipmap_testkit::model::{SetOp, replay_set};

fn decode(data: &[u8]) -> Vec<SetOp> {
    data.chunks_exact(2)
        .map(|chunk| {
            let key = i64::from(chunk[1] as i8 / 2);
            match chunk[0] % 8 {
                0..=3 => SetOp::Add(key),
                4..=5 => SetOp::Remove(key),
                6 => SetOp::Contains(key),
                _ => SetOp::Range(key, i64::from(chunk[0] as i8 / 2)),
            }
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, ops)) = data.split_first() else {
        return;
    };
    let levels = LevelGenerator::seeded(u64::from(seed), Probability::QUARTER);
    let mut set = SkipSet::with_rng(Natural, 8, levels);
    if let Err(divergence) = replay_set(&mut set, &decode(ops)) {
        panic!("{divergence}");
    }
});
