//! Element-type contract and the per-type numeric constants table.
//!
//! Every kernel is generic over [`Real`]. Thresholds that depend on the
//! floating-point format (safe minimum for pivot scaling, the Blue scaling
//! constants used by `nrm2`) live in [`NumericConstants`], computed once per
//! type from its exponent range and cached for the life of the process.

use std::fmt::{Debug, Display};
use std::sync::OnceLock;

use num_traits::{Float, NumAssign};

/// Floating-point element type accepted by the linrus kernels.
pub trait Real: Float + NumAssign + Debug + Display + Default + Send + Sync + 'static {
    /// Base of the exponent representation.
    const RADIX: u32;
    /// One more than the smallest normal exponent (C `*_MIN_EXP`).
    const MIN_EXP: i32;
    /// One more than the largest exponent (C `*_MAX_EXP`).
    const MAX_EXP: i32;
    /// Number of significant digits in base `RADIX`.
    const DIGITS: u32;

    /// Lossy conversion used by generators and test fixtures.
    fn from_f64(v: f64) -> Self;

    /// The process-wide constants table for this type.
    fn constants() -> &'static NumericConstants<Self>;
}

/// Type-generic numeric constants.
///
/// `tsml`/`tbig` split magnitudes into the small/medium/big buckets of the
/// Euclidean norm, `ssml`/`sbig` are the matching scale factors. All four
/// are exact powers of the radix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConstants<T> {
    pub zero: T,
    pub one: T,
    pub two: T,
    pub half: T,
    pub radix: T,
    /// Smallest value whose reciprocal does not overflow.
    pub safe_min: T,
    pub safe_max: T,
    /// Largest finite value.
    pub huge: T,
    /// Smallest positive normal value.
    pub tiny: T,
    pub tsml: T,
    pub tbig: T,
    pub ssml: T,
    pub sbig: T,
}

#[inline]
fn floor_half(e: i32) -> i32 {
    e.div_euclid(2)
}

#[inline]
fn ceil_half(e: i32) -> i32 {
    -(-e).div_euclid(2)
}

impl<T: Real> NumericConstants<T> {
    /// Derive the table from `T`'s exponent range.
    pub fn compute() -> Self {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let radix = T::from_f64(f64::from(T::RADIX));
        let digits = T::DIGITS as i32;

        let safe_min = radix.powi((T::MIN_EXP - 1).max(1 - T::MAX_EXP));

        Self {
            zero,
            one,
            two,
            half: one / two,
            radix,
            safe_min,
            safe_max: one / safe_min,
            huge: T::max_value(),
            tiny: T::min_positive_value(),
            tsml: radix.powi(ceil_half(T::MIN_EXP - 1)),
            tbig: radix.powi(floor_half(T::MAX_EXP - digits + 1)),
            ssml: radix.powi(-floor_half(T::MIN_EXP - digits)),
            sbig: radix.powi(-ceil_half(T::MAX_EXP + digits - 1)),
        }
    }
}

/// Constants table for `T` (initialized on first use).
#[inline]
pub fn constants<T: Real>() -> &'static NumericConstants<T> {
    T::constants()
}

macro_rules! impl_real {
    ($t:ty) => {
        impl Real for $t {
            const RADIX: u32 = <$t>::RADIX;
            const MIN_EXP: i32 = <$t>::MIN_EXP;
            const MAX_EXP: i32 = <$t>::MAX_EXP;
            const DIGITS: u32 = <$t>::MANTISSA_DIGITS;

            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            fn constants() -> &'static NumericConstants<Self> {
                static TABLE: OnceLock<NumericConstants<$t>> = OnceLock::new();
                TABLE.get_or_init(NumericConstants::compute)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
