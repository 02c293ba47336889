//! Uniform random value generator
//!
//! Every value in `[min, max]` is equally likely. Uses the xoshiro256++ PRNG,
//! which is fast and statistically sound; `next_value()` is called at least
//! once per cell of every trial.

use super::ValueGenerator;
use crate::config::Cell;
use rand::distributions::Uniform;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random generator over a closed range
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: Xoshiro256PlusPlus,
    range: Uniform<Cell>,
}

impl UniformGenerator {
    /// Create a generator seeded from OS entropy
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: Cell, max: Cell) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
            range: Uniform::new_inclusive(min, max),
        }
    }

    /// Create a generator with a fixed seed
    ///
    /// Useful for reproducible tests.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn with_seed(min: Cell, max: Cell, seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            range: Uniform::new_inclusive(min, max),
        }
    }
}

impl ValueGenerator for UniformGenerator {
    #[inline(always)]
    fn next_value(&mut self, _row: usize, _col: usize) -> Cell {
        self.rng.sample(self.range)
    }
}
