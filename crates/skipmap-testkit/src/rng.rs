//! Deterministic random sources for pinning node levels in tests.

use rand::RngCore;
use skipmap_level::{LevelGenerator, Probability};

/// Every draw is `0.0`, so every coin flip promotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallestRng;

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

/// Every draw is just below `1.0`, so no coin flip promotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRng;

impl RngCore for FlatRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(u8::MAX);
    }
}

/// Generator that always draws the ceiling.
pub fn tallest() -> LevelGenerator<TallestRng> {
    LevelGenerator::new(TallestRng, Probability::default())
}

/// Generator that always draws level 0.
pub fn flat() -> LevelGenerator<FlatRng> {
    LevelGenerator::new(FlatRng, Probability::default())
}
