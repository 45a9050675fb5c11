//! # Conversion and comparison
//!
//! Comparisons between two rationals are exact and never go through floating point. Comparisons
//! with, and differences to, a plain number convert the rational to `f64` first.
use std::cmp::Ordering;

use crate::data::number_types::extended::{Comparison, Extended};
use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::SignedInteger;

impl<I: SignedInteger> Rational<I> {
    /// Floating point value of this rational.
    ///
    /// * `0/0` is `Undefined`
    /// * `n/0` is `PositiveInfinity` or `NegativeInfinity`, depending on the sign of `n`
    /// * otherwise the result of the float division `n / d`
    pub fn to_float(&self) -> Extended<f64> {
        match (self.numerator.signum(), self.denominator.is_zero()) {
            (_, false) => Extended::Ok(self.numerator.to_float() / self.denominator.to_float()),
            (sign, true) if sign > I::zero() => Extended::PositiveInfinity,
            (sign, true) if sign < I::zero() => Extended::NegativeInfinity,
            _ => Extended::Undefined,
        }
    }

    /// The difference `self - x`.
    ///
    /// Infinite and undefined values of `self` propagate unchanged.
    pub fn diff_num(&self, x: f64) -> Extended<f64> {
        self.to_float().map(|value| value - x)
    }

    /// Compare to an ordinary number.
    ///
    /// A finite rational is converted to `f64` and compared with exact float equality. The
    /// infinities are larger, respectively smaller, than any number, and `0/0` is not comparable.
    pub fn compare_to_num(&self, x: f64) -> Comparison {
        match self.to_float() {
            Extended::Ok(value) => value.partial_cmp(&x).into(),
            Extended::PositiveInfinity => Comparison::GreaterThan,
            Extended::NegativeInfinity => Comparison::LessThan,
            Extended::Undefined => Comparison::Undefined,
        }
    }

    /// Compare the represented values of two rationals, exactly.
    ///
    /// * Either operand `0/0`: `Undefined`
    /// * Both operands infinite: `Undefined`
    /// * One operand infinite: the sign of that infinity decides
    /// * Both finite: the sign of the cross product `n1 * d2 - n2 * d1` after standardizing
    pub fn compare(&self, other: &Self) -> Comparison {
        if self.is_undefined() || other.is_undefined() {
            return Comparison::Undefined;
        }

        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => Comparison::Undefined,
            (true, false) => infinity_side(self.numerator),
            (false, true) => infinity_side(other.numerator).reverse(),
            (false, false) => {
                let (left, right) = (self.standardize(), other.standardize());
                cross_product_sign(
                    left.numerator, left.denominator,
                    right.numerator, right.denominator,
                ).into()
            },
        }
    }
}

/// The difference `x - r`.
///
/// The reverse of `Rational::diff_num`: finite results are negated, and the sign of an infinity
/// flips.
pub fn num_diff<I: SignedInteger>(x: f64, r: &Rational<I>) -> Extended<f64> {
    -r.diff_num(x)
}

/// Compare an ordinary number to a rational.
///
/// The mirror image of `Rational::compare_to_num`.
pub fn num_compare<I: SignedInteger>(x: f64, r: &Rational<I>) -> Comparison {
    r.compare_to_num(x).reverse()
}

fn infinity_side<I: SignedInteger>(numerator: I) -> Comparison {
    if numerator > I::zero() {
        Comparison::GreaterThan
    } else {
        Comparison::LessThan
    }
}

/// Order `a / b` and `c / d` for positive denominators `b` and `d`.
///
/// Equivalent to the sign of `a * d - c * b`. When either product doesn't fit the integer type,
/// the fractions are compared through their continued fraction expansions instead, which only
/// needs divisions and remainders of the inputs.
fn cross_product_sign<I: SignedInteger>(a: I, b: I, c: I, d: I) -> Ordering {
    if let (Some(left), Some(right)) = (a.checked_mul(&d), c.checked_mul(&b)) {
        return left.cmp(&right);
    }

    let (mut a, mut b, mut c, mut d) = (a, b, c, d);
    loop {
        // Floor division for positive divisors
        let (q1, r1) = (a.div_euclid(&b), a.rem_euclid(&b));
        let (q2, r2) = (c.div_euclid(&d), c.rem_euclid(&d));

        if q1 != q2 {
            return q1.cmp(&q2);
        }
        match (r1.is_zero(), r2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // r1 / b < r2 / d if and only if d / r2 < b / r1
            (false, false) => (a, b, c, d) = (d, r2, b, r1),
        }
    }
}
