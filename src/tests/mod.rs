//! # Tests that look at the crate as a whole.
//!
//! * `scenarios`: worked examples, from the arithmetic layer up to the closest rational
//! * `properties`: randomized checks of the invariants of the search
