//! Random source for spawn decisions
//!
//! The simulation only ever asks for uniform integers, so the seam is a
//! single half-open `range` primitive. Production code uses a seeded PCG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer generator consumed by the spawn policy
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn range(&mut self, low: i32, high: i32) -> i32;

    /// Uniform integer in `[low, high]`
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.range(low, high.saturating_add(1))
    }
}

/// PCG-backed random source that remembers its seed
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}
