//! Random sources driving maze carving.
//!
//! The generator never reaches for an ambient generator. It draws through the [`RandomSource`]
//! trait so a session can be seeded for reproducible mazes and tests can script every draw.

use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

/// Provider of uniform integer draws.
#[expect(
    clippy::module_name_repetitions,
    reason = "`RandomSource` is the seam callers implement; a bare `Source` would not say what it produces."
)]
pub trait RandomSource {
    /// Returns a value drawn uniformly from `0..bound`.
    ///
    /// Callers never pass a `bound` of zero.
    fn below(&mut self, bound: usize) -> usize;
}

/// Random source backed by the standard seeded generator from [`rand`].
#[derive(Clone, Debug)]
pub struct SeededSource {
    /// Seed the generator was created from, kept so it can be logged and shown.
    seed: u64,
    /// Underlying generator.
    rng: StdRng,
}

impl SeededSource {
    /// Creates a source whose draws are fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Seed this source was created from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Random source replaying a fixed list of draws.
///
/// Each draw takes the next scripted value modulo the requested bound, cycling back to the start
/// once the list runs out. An empty script always draws zero.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    /// Scripted draws.
    values: Vec<usize>,
    /// Index of the next scripted draw.
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source replaying `values` in order.
    pub const fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn below(&mut self, bound: usize) -> usize {
        let Some(value) = self.values.get(self.cursor).copied() else {
            return 0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();

        value % bound
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}
