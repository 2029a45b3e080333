//! Deterministic simulation RNG and the `RandomSource` seam.
//!
//! The step engine never reaches for an ambient generator.  Every random
//! draw goes through a `&mut impl RandomSource` passed in by the caller, so
//! a run is fully determined by its seed and tests can substitute a scripted
//! source that returns exactly the draws they need.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The two kinds of draw the step engine makes.
pub trait RandomSource {
    /// `true` with probability `p` (clamped to [0, 1]; NaN never fires).
    fn chance(&mut self, p: f64) -> bool;

    /// A uniformly distributed index in `0..len`.
    ///
    /// # Panics
    /// May panic if `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for scenario generation and per-tick draws.
///
/// Used only in single-threaded contexts.  Derive independent streams for
/// separate concerns (placement vs. stepping) with [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli draw.  `p` is clamped to [0, 1] and NaN yields `false`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p)
    }

    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
