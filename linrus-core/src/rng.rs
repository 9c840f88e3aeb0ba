//! Deterministic PRNG for reproducible fills and test fixtures.
//!
//! `SplitMix64` backs `OwningVector::fill_uniform` and
//! `OwningMatrix::fill_uniform`: a seeded run always produces the same
//! matrix, so benchmark inputs and factorization fixtures are repeatable.

use crate::scalar::Real;

/// SplitMix64 PRNG: single u64 state, period 2^64.
///
/// # Example
/// ```
/// use linrus_core::SplitMix64;
///
/// let mut rng = SplitMix64::new(42);
/// let v: f64 = rng.uniform(1.0, 10.0);
/// assert!((1.0..10.0).contains(&v));
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1), from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    #[inline]
    pub fn uniform<T: Real>(&mut self, lo: T, hi: T) -> T {
        lo + (hi - lo) * T::from_f64(self.next_f64())
    }
}
