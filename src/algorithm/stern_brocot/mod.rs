//! # Best rational approximation
//!
//! Every positive rational appears exactly once in the Stern-Brocot tree, which is spanned by the
//! two "roots" `0/1` and `1/0`. Descending into the tree by repeatedly taking the mediant of the
//! current bounds narrows a bracket around a target value, and the two endpoints stay adjacent
//! throughout: `|n1 * d2 - n2 * d1| = 1`. That makes every rational visited reduced, and the
//! endpoints when the descent stops are the best lower and upper approximations with a bounded
//! denominator.
//!
//! The descent is stopped when the next mediant would have a denominator larger than allowed, or
//! when the target is hit exactly.
use log::{debug, trace};

use crate::algorithm::SearchError;
use crate::algorithm::utilities::last_satisfying;
use crate::data::number_types::extended::{Comparison, Extended};
use crate::data::number_types::rational::{num_diff, Rational};
use crate::data::number_types::traits::SignedInteger;

pub mod descent;

/// Two rationals enclosing a target value.
///
/// The lower endpoint is at most the target and the upper endpoint is at least the target. If the
/// target was hit exactly, both endpoints are equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Bracket<I> {
    lower: Rational<I>,
    upper: Rational<I>,
}

impl<I: SignedInteger> Bracket<I> {
    /// Create a new bracket.
    ///
    /// The endpoints are not checked to be ordered.
    pub fn new(lower: Rational<I>, upper: Rational<I>) -> Self {
        Self { lower, upper }
    }

    /// The roots of the Stern-Brocot tree, `0/1` and `1/0`, enclosing all non-negative numbers.
    pub fn unbounded() -> Self {
        Self::new(Rational::new(I::zero(), I::one()), Rational::new(I::one(), I::zero()))
    }

    /// Endpoint below the target.
    pub fn lower(&self) -> Rational<I> {
        self.lower
    }

    /// Endpoint above the target.
    pub fn upper(&self) -> Rational<I> {
        self.upper
    }

    /// Whether the target was found exactly.
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    /// The bracket around the negated target.
    ///
    /// Negation reverses the order, so the endpoints are swapped.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.upper.negate(), self.lower.negate())
    }

    /// The mediant of the two endpoints, the next rational to visit in the tree.
    fn checked_mediant(&self) -> Option<Rational<I>> {
        self.lower.checked_mediant(&self.upper)
    }
}

impl<I: SignedInteger> From<Bracket<I>> for (Rational<I>, Rational<I>) {
    fn from(bracket: Bracket<I>) -> Self {
        (bracket.lower, bracket.upper)
    }
}

/// The rational closest to `x` with a denominator of at most `den_max`.
///
/// Zero is returned as `0/1` directly. Otherwise, the endpoint of `closest_bracket` that is closest
/// to `x` is returned, where ties go to the upper endpoint.
///
/// # Errors
///
/// If `den_max` isn't positive, or `x` isn't finite.
///
/// # Example
///
/// ```
/// use brocot::algorithm::stern_brocot::closest_rational;
/// use brocot::data::number_types::rational::Rational64;
///
/// assert_eq!(closest_rational(0.17, 10), Ok(Rational64::new(1, 6)));
/// assert_eq!(closest_rational(0.17, 100), Ok(Rational64::new(17, 100)));
/// ```
pub fn closest_rational<I: SignedInteger>(x: f64, den_max: I) -> Result<Rational<I>, SearchError> {
    validate(x, den_max)?;

    if x == 0f64 {
        return Ok(Rational::new(I::zero(), I::one()));
    }

    let bracket = closest_bracket(x, den_max)?;
    let (lower, upper) = (bracket.lower(), bracket.upper());
    let lower_is_closer = match (num_diff(x, &lower), upper.diff_num(x)) {
        (Extended::Ok(left), Extended::Ok(right)) => left < right,
        // Only when the target exceeds the range of the integer type; the finite side wins
        (Extended::Ok(_), _) => true,
        _ => false,
    };

    let closest = if lower_is_closer { lower } else { upper };
    debug!("closest rational to {} with denominator at most {}: {}", x, den_max, closest);
    Ok(closest)
}

/// The tightest bracket around `x` of rationals with a denominator of at most `den_max`.
///
/// Both endpoints are reduced and, unless they are equal or one is infinite, adjacent in the
/// Stern-Brocot tree. For negative `x`, the bracket around `-x` is negated.
///
/// # Errors
///
/// If `den_max` isn't positive, or `x` isn't finite.
///
/// # Example
///
/// ```
/// use brocot::algorithm::stern_brocot::closest_bracket;
/// use brocot::data::number_types::rational::Rational64;
///
/// let bracket = closest_bracket(-std::f64::consts::PI, 10i64).unwrap();
/// assert_eq!(bracket.lower(), Rational64::new(-22, 7));
/// assert_eq!(bracket.upper(), Rational64::new(-25, 8));
/// ```
pub fn closest_bracket<I: SignedInteger>(x: f64, den_max: I) -> Result<Bracket<I>, SearchError> {
    validate(x, den_max)?;

    debug!("bracketing {} with denominator at most {}", x, den_max);
    let bracket = narrow(x.abs(), den_max);
    Ok(if x < 0f64 { bracket.negate() } else { bracket })
}

pub(crate) fn validate<I: SignedInteger>(x: f64, den_max: I) -> Result<(), SearchError> {
    if den_max <= I::zero() {
        Err(SearchError::DenominatorCap)
    } else if !x.is_finite() {
        Err(SearchError::NonFiniteTarget(x))
    } else {
        Ok(())
    }
}

/// Descend the tree from the roots towards a non-negative, finite `x`.
///
/// Runs of steps in the same direction are taken at once: moving the upper endpoint `k` times
/// towards the lower endpoint gives `upper + k * lower` (componentwise), and the largest `k` for
/// which that stays above `x` is found by `last_satisfying`. The result is the same as when taking
/// one mediant at a time, see `descent::Descent`.
fn narrow<I: SignedInteger>(x: f64, den_max: I) -> Bracket<I> {
    debug_assert!(x >= 0f64 && x.is_finite());

    let mut bracket = Bracket::unbounded();
    loop {
        if bracket.lower.compare_to_num(x) == Comparison::Equal
            || bracket.upper.compare_to_num(x) == Comparison::Equal {
            return bracket;
        }

        let mediant = match bracket.checked_mediant() {
            Some(mediant) if mediant.denominator() <= den_max => mediant,
            // Denominator cap or integer range reached
            _ => return bracket,
        };

        match mediant.compare_to_num(x) {
            Comparison::Equal => return Bracket::new(mediant, mediant),
            Comparison::GreaterThan => {
                let (steps, upper) = last_satisfying(mediant, |k| {
                    stride(bracket.upper, bracket.lower, k)
                        .filter(|candidate| candidate.denominator() <= den_max)
                        .filter(|candidate| candidate.compare_to_num(x) == Comparison::GreaterThan)
                });
                trace!("{} steps left, upper endpoint {} -> {}", steps, bracket.upper, upper);
                bracket.upper = upper;
            },
            Comparison::LessThan => {
                let (steps, lower) = last_satisfying(mediant, |k| {
                    stride(bracket.lower, bracket.upper, k)
                        .filter(|candidate| candidate.denominator() <= den_max)
                        .filter(|candidate| candidate.compare_to_num(x) == Comparison::LessThan)
                });
                trace!("{} steps right, lower endpoint {} -> {}", steps, bracket.lower, lower);
                bracket.lower = lower;
            },
            // Mediants are finite and the target is a number
            Comparison::Undefined => return bracket,
        }
    }
}

/// The rational `(from.n + k * towards.n) / (from.d + k * towards.d)`, if it can be represented.
///
/// This is the result of taking the mediant with `towards` for `k` times, starting at `from`.
fn stride<I: SignedInteger>(from: Rational<I>, towards: Rational<I>, k: I) -> Option<Rational<I>> {
    let numerator = towards.numerator().checked_mul(&k)?.checked_add(&from.numerator())?;
    let denominator = towards.denominator().checked_mul(&k)?.checked_add(&from.denominator())?;

    Some(Rational::new(numerator, denominator))
}
