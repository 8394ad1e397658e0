//! Injectable randomness for deck construction and shuffling.
//!
//! ## Key Features
//!
//! - **Injectable**: every random operation in the engine is generic over
//!   `RandomSource`, so tests can script exact outcomes
//! - **Deterministic**: `GameRng` produces the same sequence for the same seed
//!
//! ## Usage
//!
//! ```
//! use deckforge::core::{GameRng, RandomSource, ScriptedRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_index(10);
//! assert!(roll < 10);
//!
//! // Scripted values are replayed in order (modulo the bound)
//! let mut scripted = ScriptedRng::new(vec![3, 1]);
//! assert_eq!(scripted.gen_index(10), 3);
//! assert_eq!(scripted.gen_index(10), 1);
//! assert_eq!(scripted.gen_index(10), 3);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random choices.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn gen_index(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place (Fisher-Yates over `gen_index`).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Replays a fixed script of values, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound. An empty
/// script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source.
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}
