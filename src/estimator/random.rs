// src/estimator/random.rs
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Where the estimator gets its market noise and cosmetic confidence from.
/// Passed in explicitly so tests can pin the outcome.
pub trait RandomSource {
    /// Uniform draw in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[low, high]`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<ThreadRng> {
    /// What request handlers use.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..=high)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..=high)
    }
}

/// Returns the same point of every range on every call.
/// `position` is a fraction of the range: 0.0 = low end, 1.0 = high end.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    position: f64,
}

impl FixedSource {
    pub fn at(position: f64) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
        }
    }

    /// Noise multiplier of exactly 1.0 for the symmetric [0.9, 1.1] band.
    pub fn midpoint() -> Self {
        Self::at(0.5)
    }
}

impl RandomSource for FixedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.position
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let span = f64::from(high.saturating_sub(low));
        low + (span * self.position).round() as u32
    }
}
