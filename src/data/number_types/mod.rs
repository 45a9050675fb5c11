//! # Number types
//!
//! The search walks the Stern-Brocot tree, whose two roots `0/1` and `1/0` already leave the
//! finite rationals. This module defines a rational type that keeps the zero denominator
//! representable, together with the result types that describe infinite and undefined values.
pub mod traits;
pub mod extended;
pub mod rational;
