//! # Traits
//!
//! The search is written once and used with every primitive signed integer width. The bounds that
//! the algorithms need from such an integer are collected here.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{AsPrimitive, CheckedNeg, Euclid, PrimInt, Signed, WrappingAdd, WrappingNeg};

/// Integer type usable as the numerator and denominator of a `Rational`.
///
/// Automatically implemented for all types satisfying the trait's bounds, which are `i8` through
/// `i128` and `isize`.
pub trait SignedInteger:
    PrimInt +
    Signed +
    Euclid +
    CheckedNeg +
    WrappingAdd +
    WrappingNeg +
    AsPrimitive<f64> +
    Hash +
    Display +
    Debug +
    Send +
    Sync +
    'static
{
    /// Floating point approximation of this integer.
    ///
    /// Rounds to nearest for magnitudes that are not exactly representable.
    fn to_float(self) -> f64 {
        self.as_()
    }
}

impl<T> SignedInteger for T
where
    T: PrimInt + Signed + Euclid + CheckedNeg + WrappingAdd + WrappingNeg + AsPrimitive<f64> + Hash
        + Display + Debug + Send + Sync + 'static,
{
}
