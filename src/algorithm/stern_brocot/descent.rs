//! # Step by step descent
//!
//! The same walk through the Stern-Brocot tree as `closest_bracket`, but one mediant at a time.
//! Each visited mediant is reported, which gives the path of the target in the tree. Grouping the
//! path into runs of equal direction gives its run-length encoding, which consists of the partial
//! quotients of the continued fraction of the final bracket.
use itertools::Itertools;
use log::trace;

use crate::algorithm::SearchError;
use crate::algorithm::stern_brocot::{validate, Bracket};
use crate::data::number_types::extended::Comparison;
use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::SignedInteger;

/// Direction taken in the tree after visiting a mediant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// The mediant was above the target and became the upper endpoint.
    Left,
    /// The mediant was below the target and became the lower endpoint.
    Right,
}

/// A mediant visited during the descent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step<I> {
    /// Went into the left subtree.
    Left(Rational<I>),
    /// Went into the right subtree.
    Right(Rational<I>),
    /// The mediant equals the target, the descent ends here.
    Exact(Rational<I>),
}

impl<I: SignedInteger> Step<I> {
    /// The rational visited.
    pub fn mediant(&self) -> Rational<I> {
        match *self {
            Step::Left(mediant) | Step::Right(mediant) | Step::Exact(mediant) => mediant,
        }
    }

    /// Where the descent went from here, if it continued.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Step::Left(_) => Some(Direction::Left),
            Step::Right(_) => Some(Direction::Right),
            Step::Exact(_) => None,
        }
    }
}

/// Iterator over the mediants visited while descending towards `|x|`.
///
/// The iterator is exhausted exactly when `closest_bracket` would stop, after which `bracket`
/// equals `closest_bracket(|x|, den_max)`.
#[derive(Clone, Debug)]
pub struct Descent<I> {
    target: f64,
    den_max: I,
    bracket: Bracket<I>,
    done: bool,
}

impl<I: SignedInteger> Descent<I> {
    /// Start at the roots of the tree.
    ///
    /// # Errors
    ///
    /// If `den_max` isn't positive, or `x` isn't finite.
    pub fn new(x: f64, den_max: I) -> Result<Self, SearchError> {
        validate(x, den_max)?;

        Ok(Self {
            target: x.abs(),
            den_max,
            bracket: Bracket::unbounded(),
            done: false,
        })
    }

    /// The bracket after the steps taken so far.
    pub fn bracket(&self) -> Bracket<I> {
        self.bracket
    }

    /// Consume the remaining steps and group them into runs of equal direction.
    ///
    /// A final exact hit is not part of any run.
    pub fn run_lengths(self) -> Vec<(Direction, usize)> {
        self.filter_map(|step| step.direction())
            .dedup_with_count()
            .map(|(count, direction)| (direction, count))
            .collect()
    }
}

impl<I: SignedInteger> Iterator for Descent<I> {
    type Item = Step<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Bracket { lower, upper } = self.bracket;
        if lower.compare_to_num(self.target) == Comparison::Equal
            || upper.compare_to_num(self.target) == Comparison::Equal {
            self.done = true;
            return None;
        }

        let mediant = match lower.checked_mediant(&upper) {
            Some(mediant) if mediant.denominator() <= self.den_max => mediant,
            _ => {
                self.done = true;
                return None;
            },
        };

        let step = match mediant.compare_to_num(self.target) {
            Comparison::Equal => {
                self.bracket = Bracket::new(mediant, mediant);
                self.done = true;
                Step::Exact(mediant)
            },
            Comparison::GreaterThan => {
                self.bracket.upper = mediant;
                Step::Left(mediant)
            },
            Comparison::LessThan => {
                self.bracket.lower = mediant;
                Step::Right(mediant)
            },
            Comparison::Undefined => {
                self.done = true;
                return None;
            },
        };

        trace!("visited {:?}", step);
        Some(step)
    }
}
