//! # Algorithms
use thiserror::Error;

pub mod stern_brocot;
pub mod utilities;

/// A search was started with arguments outside of its domain.
///
/// These are contract violations by the caller rather than runtime failures: for valid arguments,
/// every search terminates with a result.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum SearchError {
    /// The maximum denominator was zero or negative, so not even the integers are admissible.
    #[error("the maximum denominator should be a positive integer")]
    DenominatorCap,
    /// The target is NaN or infinite.
    ///
    /// NaN can't be compared with any rational, and an infinite target can't be bracketed by
    /// finite rationals in a finite number of steps.
    #[error("can't approximate the non-finite value {0}")]
    NonFiniteTarget(f64),
}
