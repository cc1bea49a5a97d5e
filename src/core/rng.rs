//! Deterministic random number generation for board seeding.
//!
//! All random placement draws flow through a single `BoardRng` created
//! once from a `u64` seed; the generator is never reseeded mid-game.
//! Same seed, same board — the binary seeds from entropy and logs the
//! seed so any game can be reproduced afterwards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for board seeding.
///
/// Uses ChaCha8 for speed and platform-independent sequences.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// A random axis index on a `board_size` board.
    pub fn coordinate(&mut self, board_size: usize) -> usize {
        self.inner.gen_range(0..board_size)
    }
}
