//! # Rational numbers
//!
//! A pair of signed integers that is never reduced or normalized. A zero denominator is allowed and
//! gives the infinities `n/0` and the undefined value `0/0`. Every operation is total: it either
//! produces another `Rational` or reports one of the special cases through `Extended` or
//! `Comparison`.
use std::fmt;
use std::ops::Neg;

use crate::data::number_types::traits::SignedInteger;

mod compare;
mod macros;

pub use compare::{num_compare, num_diff};

/// Rational with 32 bit numerator and denominator.
pub type Rational32 = Rational<i32>;
/// Rational with 64 bit numerator and denominator.
pub type Rational64 = Rational<i64>;
/// Rational with 128 bit numerator and denominator.
pub type Rational128 = Rational<i128>;

/// A signed rational `numerator / denominator`.
///
/// Equality through `==` is structural: `1/2` and `2/4` are different values of this type. Use
/// `Rational::compare` to compare represented values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rational<I> {
    numerator: I,
    denominator: I,
}

impl<I: SignedInteger> Rational<I> {
    /// Create a new instance without any normalization.
    pub fn new(numerator: I, denominator: I) -> Self {
        Self { numerator, denominator }
    }

    /// The integer `value / 1`.
    pub fn integer(value: I) -> Self {
        Self::new(value, I::one())
    }

    /// Numerator as stored.
    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// Denominator as stored, possibly zero or negative.
    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// Whether this is an ordinary number, that is, the denominator is nonzero.
    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Whether this is `n/0` with `n` nonzero.
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// Whether this is `0/0`.
    pub fn is_undefined(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    /// The mediant `(n1 + n2) / (d1 + d2)`.
    ///
    /// Well-defined for zero denominators; `mediant(1/2, 1/0)` is `2/2`. On overflow of the
    /// integer type the components wrap around, see `checked_mediant` for a variant that detects
    /// this.
    #[must_use]
    pub fn mediant(&self, other: &Self) -> Self {
        Self::new(
            self.numerator.wrapping_add(&other.numerator),
            self.denominator.wrapping_add(&other.denominator),
        )
    }

    /// The mediant, or `None` if either component doesn't fit the integer type.
    pub fn checked_mediant(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            self.numerator.checked_add(&other.numerator)?,
            self.denominator.checked_add(&other.denominator)?,
        ))
    }

    /// The additive inverse `-n / d`.
    ///
    /// Flips the sign of an infinity and leaves `0/0` as it is. `I::MIN` as a numerator wraps to
    /// itself, it has no positive counterpart.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.numerator.wrapping_neg(), self.denominator)
    }

    /// The same value with a non-negative denominator.
    ///
    /// Flips the sign of both components if the denominator is negative. Like `negate`, `I::MIN`
    /// components wrap.
    #[must_use]
    pub fn standardize(&self) -> Self {
        if self.denominator < I::zero() {
            Self::new(self.numerator.wrapping_neg(), self.denominator.wrapping_neg())
        } else {
            *self
        }
    }

    /// Render the numerator and denominator with a custom formatter.
    ///
    /// The `Display` implementation is `format_with(|n, d| format!("{}/{}", n, d))`.
    pub fn format_with<F>(&self, format: F) -> String
    where
        F: FnOnce(I, I) -> String,
    {
        format(self.numerator, self.denominator)
    }
}

impl<I: SignedInteger> Neg for Rational<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<I: SignedInteger> From<(I, I)> for Rational<I> {
    fn from((numerator, denominator): (I, I)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl<I: SignedInteger> From<Rational<I>> for (I, I) {
    fn from(value: Rational<I>) -> Self {
        (value.numerator, value.denominator)
    }
}

impl<I: SignedInteger> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
