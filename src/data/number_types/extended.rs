//! # Extended results
//!
//! A rational with a zero denominator is either a signed infinity or has no numeric meaning at
//! all. Rather than failing, conversions and comparisons involving such values report the case
//! through the sum types in this module.
use std::cmp::Ordering;
use std::ops::Neg;

/// A value on the extended real line, or the absence of one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extended<T> {
    /// An ordinary, finite value.
    Ok(T),
    /// Larger than any finite value.
    PositiveInfinity,
    /// Smaller than any finite value.
    NegativeInfinity,
    /// No numeric meaning, such as for `0/0`.
    Undefined,
}

impl<T> Extended<T> {
    /// Whether this is a finite value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Extended::Ok(_))
    }

    /// The finite value, if there is one.
    pub fn ok(self) -> Option<T> {
        match self {
            Extended::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Apply a function to the finite value, leaving the sentinels untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extended<U> {
        match self {
            Extended::Ok(value) => Extended::Ok(f(value)),
            Extended::PositiveInfinity => Extended::PositiveInfinity,
            Extended::NegativeInfinity => Extended::NegativeInfinity,
            Extended::Undefined => Extended::Undefined,
        }
    }
}

/// Negation flips the sign of an infinity; `Undefined` stays undefined.
impl<T: Neg<Output = T>> Neg for Extended<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Extended::Ok(value) => Extended::Ok(-value),
            Extended::PositiveInfinity => Extended::NegativeInfinity,
            Extended::NegativeInfinity => Extended::PositiveInfinity,
            Extended::Undefined => Extended::Undefined,
        }
    }
}

/// Outcome of comparing two values that might not be comparable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Comparison {
    /// The left hand side is smaller.
    LessThan,
    /// Both sides represent the same value.
    Equal,
    /// The left hand side is larger.
    GreaterThan,
    /// At least one side has no value, or the values can't be ordered.
    Undefined,
}

impl Comparison {
    /// The comparison with the operands swapped.
    ///
    /// `Equal` and `Undefined` are symmetric.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Comparison::LessThan => Comparison::GreaterThan,
            Comparison::GreaterThan => Comparison::LessThan,
            other => other,
        }
    }

    /// Convert to a standard library ordering, if the comparison is defined.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            Comparison::LessThan => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::GreaterThan => Some(Ordering::Greater),
            Comparison::Undefined => None,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::LessThan,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::GreaterThan,
        }
    }
}

/// The result of `PartialOrd::partial_cmp`, where `None` means the operands are unordered.
impl From<Option<Ordering>> for Comparison {
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Comparison::Undefined, Comparison::from)
    }
}
