//! # Rational approximation with a bounded denominator
//!
//! Finds the fraction closest to a number among all fractions with a denominator of at most a given
//! cap, together with the tightest bracket of such fractions around it. The search descends the
//! Stern-Brocot tree by taking mediants, as described in Concrete Mathematics by Ronald L. Graham,
//! Donald E. Knuth and Oren Patashnik, section 4.5.
//!
//! The rationals used during the search allow a zero denominator, for the root `1/0` of the tree.
//! All operations on them are total; infinite and undefined results are reported through
//! `Extended` and `Comparison` rather than by panicking.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

pub use algorithm::SearchError;
pub use algorithm::stern_brocot::{closest_bracket, closest_rational, Bracket};
pub use data::number_types::extended::{Comparison, Extended};
pub use data::number_types::rational::{Rational, Rational128, Rational32, Rational64};

#[cfg(test)]
mod tests;
