//! Deterministic, injectable randomness.
//!
//! Every `LineSim` owns its own [`SimRng`], derived from the service's
//! master seed via [`SimRng::child`].  This keeps randomness out of the
//! ambient environment: the same master seed always reproduces the same
//! train speeds, incident sequence, and station metrics, and tests can
//! pin a seed to assert exact outcomes.
//!
//! Child derivation mixes the offset with the 64-bit fractional part of
//! the golden ratio, which spreads consecutive offsets uniformly across
//! the seed space so sibling lines never share RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded RNG owned by a single simulation component.
///
/// Intentionally `!Sync`: each owner holds its own instance, so there is
/// no contention and no cross-component ordering dependency.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — used to give
    /// each line an independent deterministic stream from the master seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
