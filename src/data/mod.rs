//! # Data structures
//!
//! Value types used by the search algorithms.
pub mod number_types;
