//! Numeric element types for the engine.
//!
//! ```text
//! Scalar
//!   └── Float  (f32, f64)
//! ```
//!
//! Matrices and vectors are generic over [`Scalar`]; the solvers need the
//! extra operations of [`Float`]. The economic model itself works in `f64`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Base trait for element types storable in a [`Matrix`](crate::Matrix).
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Convert from `usize` (dimension arithmetic, e.g. `1/sqrt(n)`).
    fn from_usize(v: usize) -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Floating-point scalars (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn recip(self) -> Self;

    /// Convert from an `f64` literal (tolerances, sentinels).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64`, used for structured log fields.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Float for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(f32::zero(), 0.0);
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(Float::sqrt(4.0_f64), 2.0);
        assert_eq!(Float::abs(-3.0_f64), 3.0);
        assert_eq!(Float::recip(4.0_f64), 0.25);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f32::from_usize(42), 42.0_f32);
        assert_eq!(<f32 as Float>::from_f64(0.5), 0.5_f32);
        assert_eq!(Float::to_f64(0.25_f32), 0.25);
    }
}
