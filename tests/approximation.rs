//! # Integration tests
//!
//! All code written in this module could be written by an external user of the crate.
use std::f64::consts::{PI, SQRT_2};

use brocot::{closest_bracket, closest_rational, Bracket, Comparison, Extended, Rational32, Rational64, SearchError};
use brocot::data::number_types::rational::{num_compare, num_diff};

#[test]
fn closest() {
    assert_eq!(closest_rational(0.17, 10i64), Ok(Rational64::new(1, 6)));
    assert_eq!(closest_rational(0.17, 100i64), Ok(Rational64::new(17, 100)));
    assert_eq!(closest_rational(0.17, 1000i64), Ok(Rational64::new(17, 100)));
    assert_eq!(closest_rational(-7f64, 3i32), Ok(Rational32::new(-7, 1)));
}

#[test]
fn brackets() {
    assert_eq!(
        closest_bracket(0f64, 1i64),
        Ok(Bracket::new(Rational64::new(0, 1), Rational64::new(1, 0))),
    );
    assert_eq!(
        closest_bracket(SQRT_2, 10i64),
        Ok(Bracket::new(Rational64::new(7, 5), Rational64::new(10, 7))),
    );
    assert_eq!(
        closest_bracket(-PI, 10i64),
        Ok(Bracket::new(Rational64::new(-22, 7), Rational64::new(-25, 8))),
    );
}

#[test]
fn safe_arithmetic() {
    let half = Rational64::new(1, 2);
    assert_eq!(half.mediant(&Rational64::new(3, 4)), Rational64::new(4, 6));
    assert_eq!(half.mediant(&Rational64::new(1, 0)), Rational64::new(2, 2));
    assert_eq!(Rational64::new(1, 0).compare(&half), Comparison::GreaterThan);
    assert_eq!(Rational64::new(-2, 0).compare(&half), Comparison::LessThan);
    assert_eq!(Rational64::new(0, 0).compare(&half), Comparison::Undefined);

    assert_eq!(num_compare(0.4, &half), Comparison::LessThan);
    assert_eq!(num_diff(1f64, &Rational64::new(3, 0)), Extended::NegativeInfinity);
    assert_eq!(Rational64::new(3, 0).diff_num(1f64), Extended::PositiveInfinity);
}

#[test]
fn contract_violations() {
    assert_eq!(closest_rational(0.3, 0i64), Err(SearchError::DenominatorCap));
    assert!(matches!(closest_rational(f64::NAN, 5i64), Err(SearchError::NonFiniteTarget(_))));
    assert_eq!(
        SearchError::DenominatorCap.to_string(),
        "the maximum denominator should be a positive integer",
    );
}
