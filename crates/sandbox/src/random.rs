//! Randomness behind a trait so rule and movement choices can be replayed.
//!
//! Every `rand` generator is a [`RandomSource`] through the blanket impl;
//! production code uses a seeded [`ChaCha8Rng`](rand_chacha::ChaCha8Rng).
//! [`ScriptedRandom`] replays a fixed cycle of unit draws, which makes a
//! single tick fully predictable in tests.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// True with probability `p`. `p >= 1.0` is always true.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Uniform integer in `lo..=hi`.
    fn pick(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = f64::from(hi - lo + 1);
        (lo + (self.unit() * span) as i32).min(hi)
    }

    /// Uniform offset in `[-spread / 2, spread / 2)`.
    fn jitter(&mut self, spread: f32) -> f32 {
        ((self.unit() - 0.5) * f64::from(spread)) as f32
    }
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays `draws` in order, wrapping around when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// # Panics
    ///
    /// Panics if `draws` is empty.
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "scripted random needs at least one draw");
        Self { draws, cursor: 0 }
    }

    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        v
    }
}
