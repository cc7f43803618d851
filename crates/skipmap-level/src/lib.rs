//! Probabilistic level generator for skipmap.
//!
//! Levels are drawn by repeated independent coin flips: starting from zero,
//! the level is raised while a uniform draw in `[0, 1)` falls below the
//! configured probability `p` and the caller's ceiling has not been reached.
//! This gives `P(level >= k) = p^k`.
//!
//! Each generator owns its random source, so two lists never share state and
//! a fixed seed reproduces the exact same structure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Probability used when none is configured.
pub const DEFAULT_PROBABILITY: f64 = 0.25;

/// Errors raised when building a [`Probability`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProbabilityError {
    #[error("level probability must lie strictly between 0 and 1, got {0}")]
    OutOfRange(f64),
}

/// Chance that a node on level `i` is also promoted to level `i + 1`.
///
/// 1/4 is a good trade-off between speed and space. 1/2 gives less variable
/// running times at the cost of more forward links per node.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const QUARTER: Probability = Probability(0.25);
    pub const HALF: Probability = Probability(0.5);

    /// Validate `p`. Zero, one, values outside the unit interval and NaN are
    /// rejected.
    pub fn new(p: f64) -> Result<Self, ProbabilityError> {
        if p > 0.0 && p < 1.0 {
            Ok(Self(p))
        } else {
            Err(ProbabilityError::OutOfRange(p))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of levels needed to keep searches logarithmic for `capacity`
    /// elements, i.e. `ceil(log_{1/p}(capacity))`.
    pub fn levels_for(self, capacity: usize) -> usize {
        if capacity <= 1 {
            return 0;
        }
        let levels = (capacity as f64).ln() / (1.0 / self.0).ln();
        levels.ceil() as usize
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::QUARTER
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draws node levels from an owned random source.
#[derive(Clone)]
pub struct LevelGenerator<R = StdRng> {
    rng: R,
    probability: Probability,
}

impl LevelGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn from_os_rng(probability: Probability) -> Self {
        Self::new(StdRng::from_os_rng(), probability)
    }

    /// Create a reproducible generator from a fixed seed.
    pub fn seeded(seed: u64, probability: Probability) -> Self {
        Self::new(StdRng::seed_from_u64(seed), probability)
    }
}

impl<R: Rng> LevelGenerator<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R, probability: Probability) -> Self {
        Self { rng, probability }
    }

    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Draw a level in `0..=ceiling`.
    pub fn random_level(&mut self, ceiling: usize) -> usize {
        let p = self.probability.get();
        let mut level = 0;
        while level < ceiling && self.rng.random::<f64>() < p {
            level += 1;
        }
        level
    }

    /// Give back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Default for LevelGenerator<StdRng> {
    fn default() -> Self {
        Self::from_os_rng(Probability::default())
    }
}

impl<R> fmt::Debug for LevelGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelGenerator")
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}
