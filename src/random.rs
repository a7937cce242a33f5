//! Injectable randomness for ship placement and AI targeting.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the random choices the engine makes.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Replays fixed sequences, for deterministic games in tests and replays.
///
/// Indices are reduced modulo the requested bound. Both sequences wrap
/// around when exhausted; an empty sequence always yields `0` / `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    coins: Vec<bool>,
    next_index: usize,
    next_coin: usize,
}

impl ScriptedSource {
    pub fn new(indices: Vec<usize>, coins: Vec<bool>) -> Self {
        Self {
            indices,
            coins,
            next_index: 0,
            next_coin: 0,
        }
    }

    /// Script a series of `(x, y)` picks; each consumes two indices, `x` first.
    pub fn from_coords(coords: &[(usize, usize)]) -> Self {
        let indices = coords.iter().flat_map(|&(x, y)| [x, y]).collect();
        Self::new(indices, Vec::new())
    }

    /// Append coin flips.
    pub fn with_coins(mut self, coins: &[bool]) -> Self {
        self.coins.extend_from_slice(coins);
        self
    }

    /// Number of indices handed out so far.
    pub fn indices_used(&self) -> usize {
        self.next_index
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        value % bound
    }

    fn next_bool(&mut self) -> bool {
        if self.coins.is_empty() {
            return false;
        }
        let value = self.coins[self.next_coin % self.coins.len()];
        self.next_coin += 1;
        value
    }
}
