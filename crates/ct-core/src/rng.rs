//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every random draw in a run comes from one `SimRng` seeded from
//! `TerminalConfig::seed`.  Because the scheduler is single-threaded and
//! dispatches processes in a fixed order, the sequence of draws, and with it
//! the whole notification stream, is a pure function of (seed, config,
//! horizon).
//!
//! Independent streams (e.g. one per arrival source) are derived with
//! [`SimRng::child`], which mixes an offset into a draw from the parent using
//! the 64-bit fractional golden-ratio constant.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG.
///
/// Used only from the scheduler's dispatch loop, so it needs no
/// synchronisation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// giving each random source its own stream from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
