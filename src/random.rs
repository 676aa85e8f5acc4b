//! Randomness capability injected into the round engine.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of the two random operations the engine needs.
///
/// Sessions own their source exclusively, so a seeded or scripted source
/// reproduces the exact same rounds.
pub trait RandomSource {
    /// Uniform integer in `0..n`. Callers guarantee `n > 0`.
    fn below(&mut self, n: usize) -> usize;

    /// Put `items` into a random order.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl RandomSource for SmallRng {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, n: usize) -> usize {
        (**self).below(n)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items)
    }
}
